//! Structured error types for the blogly data layer.
//!
//! Uses `thiserror` for better API surface and error composition.
//! The binary crate (blogly-cli) can still use `anyhow` for convenience,
//! but library consumers get structured, composable errors.

use thiserror::Error;

use crate::models::ValidationError;

/// Main error type for data-layer operations.
///
/// Every write failure rolls back the whole operation, so none of these
/// errors leaves partial state behind.
#[derive(Error, Debug)]
pub enum DataError {
    /// Lookup by id failed. The only error routinely surfaced to end users.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Required field empty or overlong, or a uniqueness rule violated.
    #[error("constraint violation: {reason}")]
    Constraint { reason: String },

    /// A foreign-key target is missing.
    #[error("referential integrity violation: {reason}")]
    ReferentialIntegrity { reason: String },

    /// Storage unavailable or the transaction aborted.
    #[error("storage error: {0}")]
    Storage(sqlx::Error),
}

/// Result type alias for data-layer operations
pub type Result<T> = std::result::Result<T, DataError>;

impl DataError {
    /// Create a not-found error for a lookup by id
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Create a constraint violation with a reason
    pub fn constraint(reason: impl Into<String>) -> Self {
        Self::Constraint {
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for DataError {
    fn from(err: ValidationError) -> Self {
        Self::Constraint {
            reason: err.to_string(),
        }
    }
}

/// Classify driver errors into the taxonomy above.
///
/// Unique/check/not-null violations are constraint violations; foreign-key
/// violations are referential-integrity errors. Everything else (connection
/// refused, pool timeout, aborted transaction) is a storage error.
impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            use sqlx::error::ErrorKind;
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Self::Constraint {
                        reason: db_err.message().to_owned(),
                    };
                }
                ErrorKind::ForeignKeyViolation => {
                    return Self::ReferentialIntegrity {
                        reason: db_err.message().to_owned(),
                    };
                }
                _ => {}
            }
        }
        Self::Storage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DataError::not_found("user", 42);
        assert_eq!(err.to_string(), "user 42 not found");
    }

    #[test]
    fn validation_error_becomes_constraint() {
        let err: DataError = ValidationError::Empty { field: "first" }.into();
        assert!(matches!(err, DataError::Constraint { .. }));
        assert_eq!(err.to_string(), "constraint violation: first cannot be empty");
    }

    #[test]
    fn non_database_errors_are_storage() {
        let err: DataError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DataError::Storage(_)));

        let err: DataError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DataError::Storage(_)));
    }
}
