//! Command implementations for the blogly CLI

pub mod migrate;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use migrate::run_migrate;
pub use serve::run_serve;
