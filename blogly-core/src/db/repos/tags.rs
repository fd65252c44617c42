//! Tag repository
//!
//! Tag names are globally unique; the schema's UNIQUE constraint is the
//! enforcement point and duplicate inserts classify as constraint
//! violations. Tag deletion removes join rows only, never posts.

use sqlx::PgPool;

use crate::error::{DataError, Result};
use crate::models::{Post, Tag, TagName};

/// Tag repository
pub struct TagRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TagRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tags in insertion order.
    pub async fn list(&self) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(tags)
    }

    /// Get a single tag by id.
    pub async fn get(&self, id: i64) -> Result<Tag> {
        sqlx::query_as("SELECT id, name FROM tags WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DataError::not_found("tag", id))
    }

    /// Insert a new tag. A name collision classifies as a constraint
    /// violation.
    pub async fn create(&self, name: TagName) -> Result<Tag> {
        let tag = sqlx::query_as(
            r#"
            INSERT INTO tags (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(tag)
    }

    /// Rename a tag. Renaming onto an existing name is a constraint
    /// violation, same as on create.
    pub async fn update(&self, id: i64, name: TagName) -> Result<Tag> {
        sqlx::query_as(
            r#"
            UPDATE tags
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DataError::not_found("tag", id))
    }

    /// Delete a tag; its join rows cascade away, posts survive.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DataError::not_found("tag", id));
        }

        Ok(())
    }

    /// Posts carrying a tag, newest first.
    pub async fn posts(&self, tag_id: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as(
            r#"
            SELECT p.id, p.title, p.content, p.created_at, p.user_id
            FROM posts p
            JOIN post_tags pt ON pt.post_id = p.id
            WHERE pt.tag_id = $1
            ORDER BY p.created_at DESC, p.id DESC
            "#,
        )
        .bind(tag_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }
}
