//! Domain models
//!
//! The wire shape and the row shape of a student are the same type;
//! request bodies decode into [`StudentPayload`], which has no `id`.

pub mod student;

pub use student::{Student, StudentPayload};
