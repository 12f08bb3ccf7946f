//! HTTP server layer
//!
//! Axum server with:
//! - `{code, data}` / `{code, message}` JSON envelopes
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{router, run_server, ServerConfig, ServerError};
