//! HTTP server command
//!
//! Resolves database settings, opens the pool, and runs the student API.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use student_server::config::{DatabaseSettings, DatabaseSource, StudentKey};
use student_server::db::{connect, PgStudentStore};
use student_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, short = 'b', env = "STUDENTS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Database connection string (falls back to POSTGRES_USER/PASSWORD/DB)
    #[arg(long, env = "DB_SOURCE", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Type of the students.id column (bigint or uuid)
    #[arg(long, env = "STUDENTS_ID_TYPE", default_value = "bigint")]
    pub id_type: StudentKey,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = DatabaseSettings::from_env(args.database_url)
        .context("Failed to resolve database settings")?;

    match settings.source {
        DatabaseSource::Composite => tracing::info!("Using database connection string"),
        DatabaseSource::Assembled => {
            tracing::info!("No DB_SOURCE set, using local database settings")
        }
    }

    // Create and check the pool before binding anything
    let pool = connect(&settings.url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection established");

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(PgStudentStore::with_key(pool, args.id_type), config)
        .await
        .context("Server error")?;

    Ok(())
}
