//! Post model and its validated inputs

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for post titles
const MAX_TITLE_LEN: usize = 50;

/// Maximum length for post content
const MAX_CONTENT_LEN: usize = 200;

/// Human-readable rendering of a post timestamp, e.g. "Sat Aug 1 2026, 3:05 PM".
fn friendly_date(ts: DateTime<Utc>) -> String {
    ts.format("%a %b %-d %Y, %-I:%M %p").to_string()
}

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new post title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 50 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.len() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PostTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated post content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Create new post content: non-empty, max 200 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        if trimmed.len() > MAX_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_CONTENT_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PostContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated input record for creating or editing a post.
///
/// The owner is not part of the record: it is fixed at creation and never
/// changes on edit. Tag associations travel separately as plain ids.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
}

impl NewPost {
    /// Validate raw form input once, at the boundary.
    pub fn new(title: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: PostTitle::new(title)?,
            content: PostContent::new(content)?,
        })
    }
}

/// Post record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

impl Post {
    /// Derived formatted creation time; never stored.
    pub fn friendly_date(&self) -> String {
        friendly_date(self.created_at)
    }
}

/// Post joined with its author's display name, for recency listings.
///
/// Built by a query-time join so list views never issue per-row lookups.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub author: String,
}

impl PostWithAuthor {
    /// Derived formatted creation time; never stored.
    pub fn friendly_date(&self) -> String {
        friendly_date(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn valid_titles() {
        assert!(PostTitle::new("First!").is_ok());
        assert!(PostTitle::new("  Trimmed  ").is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        assert!(matches!(
            PostTitle::new("").unwrap_err(),
            ValidationError::Empty { field: "title" }
        ));
        assert!(matches!(
            PostTitle::new("   ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn title_max_length() {
        assert!(PostTitle::new(&"a".repeat(50)).is_ok());

        let err = PostTitle::new(&"a".repeat(51)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 50, .. }));
    }

    #[test]
    fn content_max_length() {
        assert!(PostContent::new(&"a".repeat(200)).is_ok());

        let err = PostContent::new(&"a".repeat(201)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 200, .. }));
    }

    #[test]
    fn rejects_empty_content() {
        assert!(matches!(
            PostContent::new("").unwrap_err(),
            ValidationError::Empty { field: "content" }
        ));
    }

    #[test]
    fn new_post_validates_both_fields() {
        assert!(NewPost::new("Title", "Content").is_ok());
        assert!(NewPost::new("", "Content").is_err());
        assert!(NewPost::new("Title", "").is_err());
    }

    #[test]
    fn friendly_date_format() {
        let post = Post {
            id: 1,
            title: "T".into(),
            content: "C".into(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 15, 5, 0).unwrap(),
            user_id: 1,
        };
        assert_eq!(post.friendly_date(), "Sat Aug 1 2026, 3:05 PM");
    }
}
