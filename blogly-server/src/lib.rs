//! blogly-server: HTTP controller and views for Blogly
//!
//! Maps HTTP verbs and paths onto the data-access operations in
//! `blogly-core`: GET routes read and render HTML through embedded Tera
//! templates, POST routes write and redirect. The crate has no schema or
//! query logic of its own.

pub mod http;
pub mod templates;

pub use http::error::PageError;
pub use http::server::{build_router, run_server, AppState, ServerConfig};
