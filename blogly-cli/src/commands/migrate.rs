//! Standalone schema setup command
//!
//! Applies the idempotent migrations and exits. Useful for provisioning
//! a database ahead of the first serve, or from CI.

use anyhow::{Context, Result};
use clap::Parser;

use blogly_core::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Apply schema migrations
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool).await.context("Migration failed")?;

    tracing::info!("Schema ready");
    Ok(())
}
