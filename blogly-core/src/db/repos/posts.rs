//! Post repository
//!
//! Posts are created in the context of an existing user and keep that owner
//! for life. The tag association set is always replaced wholesale: writes
//! that touch both the post row and the join table run inside a single
//! transaction, so a failure midway leaves no partial tag set behind.

use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::error::{DataError, Result};
use crate::models::{NewPost, Post, PostWithAuthor, Tag};

/// How many posts the recency listing returns when the caller does not say.
pub const DEFAULT_RECENT_LIMIT: i64 = 5;

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Most recent posts, newest first, truncated to `limit`.
    ///
    /// Joins the author in the same query so list views never issue
    /// per-row lookups.
    pub async fn recent(&self, limit: i64) -> Result<Vec<PostWithAuthor>> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.id,
                p.title,
                p.created_at,
                p.user_id,
                u.first_name || ' ' || u.last_name AS author
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        let posts = rows
            .into_iter()
            .map(|r| PostWithAuthor {
                id: r.get("id"),
                title: r.get("title"),
                created_at: r.get("created_at"),
                user_id: r.get("user_id"),
                author: r.get("author"),
            })
            .collect();

        Ok(posts)
    }

    /// Get a single post by id.
    pub async fn get(&self, id: i64) -> Result<Post> {
        sqlx::query_as(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DataError::not_found("post", id))
    }

    /// Insert a post owned by `user_id` and link its tags.
    ///
    /// A vanished owner surfaces as a referential-integrity error from the
    /// foreign key; unknown tag ids are silently ignored (only existing tags
    /// are linked).
    pub async fn create(&self, user_id: i64, post: NewPost, tag_ids: &[i64]) -> Result<Post> {
        let mut tx = self.pool.begin().await?;

        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        link_tags(&mut tx, post.id, tag_ids).await?;

        tx.commit().await?;
        Ok(post)
    }

    /// Replace title, content, and the whole tag set.
    ///
    /// `created_at` and the owner are never touched.
    pub async fn update(&self, id: i64, post: NewPost, tag_ids: &[i64]) -> Result<Post> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<Post> = sqlx::query_as(
            r#"
            UPDATE posts
            SET title = $1, content = $2
            WHERE id = $3
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let updated = updated.ok_or(DataError::not_found("post", id))?;

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        link_tags(&mut tx, id, tag_ids).await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a post; its join rows cascade away, tags and the owning user
    /// survive. Returns the deleted post so callers can redirect to its
    /// owner.
    pub async fn delete(&self, id: i64) -> Result<Post> {
        sqlx::query_as(
            r#"
            DELETE FROM posts
            WHERE id = $1
            RETURNING id, title, content, created_at, user_id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DataError::not_found("post", id))
    }

    /// Tags attached to a post, name-ordered.
    pub async fn tags(&self, post_id: i64) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN post_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }
}

/// Link a post to every *existing* tag named in `tag_ids`.
///
/// Unknown ids match no tags row and insert nothing; duplicate ids collapse
/// through ON CONFLICT on the composite key.
async fn link_tags(
    tx: &mut Transaction<'_, Postgres>,
    post_id: i64,
    tag_ids: &[i64],
) -> Result<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO post_tags (post_id, tag_id)
        SELECT $1, t.id FROM tags t WHERE t.id = ANY($2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(tag_ids)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    // Postgres-backed contract tests live in tests/storage_contract.rs.
    // Run with: DATABASE_URL=... cargo test -p blogly-core -- --ignored
}
