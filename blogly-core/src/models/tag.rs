//! Tag model and its validated input

use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for tag names
const MAX_TAG_NAME_LEN: usize = 50;

/// Validated tag name.
///
/// Uniqueness is a storage rule, not a shape rule: the schema's UNIQUE
/// constraint enforces it, so two `TagName`s may compare equal here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    /// Create a new tag name: non-empty, max 50 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.len() > MAX_TAG_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_TAG_NAME_LEN,
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

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Tag record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(TagName::new("rust").is_ok());
        assert_eq!(TagName::new("  fun  ").unwrap().as_str(), "fun");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            TagName::new("").unwrap_err(),
            ValidationError::Empty { field: "name" }
        ));
        assert!(matches!(
            TagName::new(" \t ").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn max_length() {
        assert!(TagName::new(&"x".repeat(50)).is_ok());

        let err = TagName::new(&"x".repeat(51)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 50, .. }));
    }
}
