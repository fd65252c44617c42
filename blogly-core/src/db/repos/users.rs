//! User repository
//!
//! Deletion relies on the schema's ON DELETE CASCADE: removing a user
//! removes its posts and, transitively, their join rows, in one atomic
//! statement.

use sqlx::PgPool;

use crate::error::{DataError, Result};
use crate::models::{NewUser, Post, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users in insertion order.
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User> {
        sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, image_url
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DataError::not_found("user", id))
    }

    /// Insert a new user. The image URL is already defaulted by [`NewUser`],
    /// so storage never sees an empty value.
    pub async fn create(&self, user: NewUser) -> Result<User> {
        let user = sqlx::query_as(
            r#"
            INSERT INTO users (first_name, last_name, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.image_url.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Replace all three editable fields. The id never changes.
    pub async fn update(&self, id: i64, user: NewUser) -> Result<User> {
        sqlx::query_as(
            r#"
            UPDATE users
            SET first_name = $1, last_name = $2, image_url = $3
            WHERE id = $4
            RETURNING id, first_name, last_name, image_url
            "#,
        )
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.image_url.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DataError::not_found("user", id))
    }

    /// Delete a user; their posts (and those posts' tag rows) cascade away
    /// with it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DataError::not_found("user", id));
        }

        Ok(())
    }

    /// Posts owned by a user, in insertion order.
    ///
    /// A missing user simply has no posts; callers that need a 404 check the
    /// user with [`UserRepo::get`] first.
    pub async fn posts(&self, user_id: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as(
            r#"
            SELECT id, title, content, created_at, user_id
            FROM posts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }
}
