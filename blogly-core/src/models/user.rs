//! User model and its validated inputs

use sqlx::FromRow;

use super::ValidationError;

/// Placeholder shown for users who never supplied a profile image.
pub const DEFAULT_IMAGE_URL: &str = "/static/no-profile-photo-150.png";

/// Maximum length for first and last names
const MAX_NAME_LEN: usize = 50;

/// Maximum length for image URLs
const MAX_IMAGE_URL_LEN: usize = 120;

/// Validated person name, used for both first and last names.
///
/// The owning field's name travels with the value so validation errors
/// report the right form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Create a validated name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 50 characters
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if trimmed.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_NAME_LEN,
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

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated profile image URL.
///
/// Never empty: absent or blank input resolves to [`DEFAULT_IMAGE_URL`] at
/// construction, so storage only ever sees a usable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Resolve submitted input to a validated URL, falling back to the
    /// placeholder when the value is absent or blank.
    pub fn or_default(value: Option<&str>) -> Result<Self, ValidationError> {
        let trimmed = value.map(str::trim).unwrap_or("");

        if trimmed.is_empty() {
            return Ok(Self(DEFAULT_IMAGE_URL.to_owned()));
        }

        if trimmed.len() > MAX_IMAGE_URL_LEN {
            return Err(ValidationError::TooLong {
                field: "image url",
                max: MAX_IMAGE_URL_LEN,
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

impl Default for ImageUrl {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_URL.to_owned())
    }
}

/// Validated input record for creating or fully replacing a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub image_url: ImageUrl,
}

impl NewUser {
    /// Validate raw form input once, at the boundary.
    pub fn new(first: &str, last: &str, image: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new("first name", first)?,
            last_name: PersonName::new("last name", last)?,
            image_url: ImageUrl::or_default(image)?,
        })
    }
}

/// User record from the database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    /// Derived display name; never stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
