//! Database layer - connection pool and student storage
//!
//! # Design Principles
//!
//! - One pool, opened at startup and shared by every handler
//! - Handlers see storage only through the `StudentStore` trait
//! - Not-found is decided from the statement result, never check-then-act

pub mod pool;
pub mod repos;

pub use pool::{connect, create_pool};
pub use repos::{DbError, MemoryStudentStore, PgStudentStore, StudentStore};
