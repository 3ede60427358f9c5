//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing (method, path, status, latency)
//! - Graceful shutdown
//! - JSON bodies with an explicit charset, plain-text errors

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use response::JsonUtf8;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
