//! Database connection settings
//!
//! A composite connection string (`DB_SOURCE`) wins. Without one, the URL
//! is assembled from `POSTGRES_USER`, `POSTGRES_PASSWORD` and `POSTGRES_DB`
//! against a local server.

use std::env;
use std::str::FromStr;

/// Composite connection string variable
pub const DB_SOURCE_VAR: &str = "DB_SOURCE";

/// Discrete settings used when no composite string is given
pub const FALLBACK_VARS: [&str; 3] = ["POSTGRES_USER", "POSTGRES_PASSWORD", "POSTGRES_DB"];

/// Host used for assembled URLs
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Port used for assembled URLs
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("database settings missing: set DB_SOURCE or {}", .0.join(", "))]
    MissingSettings(Vec<&'static str>),

    #[error("unknown id type '{0}' (expected bigint or uuid)")]
    UnknownKeyType(String),
}

/// Primary key type of the `students` table.
///
/// Path ids are cast to this type in SQL, so lookups use the key index
/// and an id the type cannot parse is a storage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentKey {
    /// serial, bigserial or integer keys
    #[default]
    BigInt,
    Uuid,
}

impl StudentKey {
    pub fn sql_type(self) -> &'static str {
        match self {
            Self::BigInt => "bigint",
            Self::Uuid => "uuid",
        }
    }
}

impl FromStr for StudentKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bigint" | "int" | "integer" | "serial" => Ok(Self::BigInt),
            "uuid" => Ok(Self::Uuid),
            _ => Err(ConfigError::UnknownKeyType(s.to_owned())),
        }
    }
}

/// Where the connection string came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseSource {
    /// Given as a single connection string
    Composite,
    /// Built from the discrete variables
    Assembled,
}

/// Resolved database settings
#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub source: DatabaseSource,
}

// The URL carries the password.
impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

impl DatabaseSettings {
    /// Resolve from the process environment.
    ///
    /// `composite` is an explicitly supplied connection string (e.g. from a
    /// command-line flag); `DB_SOURCE` is consulted when it is `None`.
    pub fn from_env(composite: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(composite, |key| env::var(key).ok())
    }

    /// Resolve using `lookup` for variable access.
    ///
    /// Empty values count as unset.
    pub fn resolve<F>(composite: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = composite
            .filter(|url| !url.is_empty())
            .or_else(|| lookup(DB_SOURCE_VAR))
        {
            return Ok(Self {
                url,
                source: DatabaseSource::Composite,
            });
        }

        let values = FALLBACK_VARS.map(|key| lookup(key));
        let missing: Vec<&'static str> = FALLBACK_VARS
            .into_iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key)
            .collect();

        let [Some(user), Some(password), Some(database)] = values else {
            return Err(ConfigError::MissingSettings(missing));
        };

        Ok(Self {
            url: format!(
                "postgres://{user}:{password}@{DEFAULT_DB_HOST}:{DEFAULT_DB_PORT}/{database}?sslmode=disable"
            ),
            source: DatabaseSource::Assembled,
        })
    }
}
