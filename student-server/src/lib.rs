//! student-server: HTTP server for the student registry
//!
//! Exposes a single `students` table over a JSON CRUD API.
//! Storage goes through the [`db::StudentStore`] trait so handlers
//! can run against PostgreSQL or an in-memory store.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseSettings, StudentKey};
pub use db::{DbError, MemoryStudentStore, PgStudentStore, StudentStore};
pub use http::{run_server, ServerConfig};
pub use models::{Student, StudentPayload};
