//! HTTP layer
//!
//! Axum server with:
//! - Request tracing
//! - Static file serving under /static
//! - HTML error pages (404 view for missing rows)
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::PageError;
pub use server::{run_server, ServerConfig};
