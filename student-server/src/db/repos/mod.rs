//! Student storage
//!
//! `StudentStore` is the seam between handlers and storage:
//! - `PgStudentStore` runs parameterized SQL against the pool
//! - `MemoryStudentStore` keeps records in a map, for tests

pub mod memory;
pub mod students;

use async_trait::async_trait;

use crate::models::{Student, StudentPayload};

pub use memory::MemoryStudentStore;
pub use students::PgStudentStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn student_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "student",
            id: id.to_owned(),
        }
    }
}

/// Storage operations behind the student routes.
///
/// Ids are passed through as given; an id that matches nothing yields
/// `DbError::NotFound`.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Every student, in whatever order storage returns them.
    async fn list(&self) -> Result<Vec<Student>, DbError>;

    /// Insert a student; storage assigns the id.
    async fn create(&self, payload: StudentPayload) -> Result<Student, DbError>;

    async fn get(&self, id: &str) -> Result<Student, DbError>;

    /// Replace every field except the id.
    async fn update(&self, id: &str, payload: StudentPayload) -> Result<Student, DbError>;

    async fn delete(&self, id: &str) -> Result<(), DbError>;
}
