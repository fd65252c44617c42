//! Schema migrations for the blogly tables
//!
//! Idempotent: every statement is CREATE ... IF NOT EXISTS, so running at
//! each startup is safe. Relationship and cascade rules live here and only
//! here; the repositories rely on them instead of re-implementing cascades.

use sqlx::PgPool;

use crate::error::Result;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running blogly migrations...");

    // Users own posts; dropping a user takes its posts along.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL,
            last_name VARCHAR(50) NOT NULL,
            image_url VARCHAR(120) NOT NULL DEFAULT '/static/no-profile-photo-150.png'
        )
        "#,
    )
    .execute(pool)
    .await?;

    // created_at is assigned here, once, and never updated afterwards.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(50) NOT NULL,
            content VARCHAR(200) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(50) NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Pure association; the composite key caps each pair at one row.
    // Deleting either side removes the row, posts and tags survive each other.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS post_tags (
            post_id BIGINT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
            tag_id BIGINT NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            PRIMARY KEY (post_id, tag_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Blogly migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<()> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_user ON posts(user_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_created ON posts(created_at DESC)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_post_tags_tag ON post_tags(tag_id)")
        .execute(pool)
        .await?;

    Ok(())
}
