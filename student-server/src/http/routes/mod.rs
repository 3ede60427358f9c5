//! Route handlers organized by resource

pub mod students;
