//! Page error types with IntoResponse
//!
//! Errors are converted to server-rendered HTML pages with appropriate
//! status codes: the 404 view for failed lookups, the generic error view
//! for everything else.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tera::Context;

use blogly_core::{DataError, ValidationError};

use crate::templates;

/// Last-resort body used when the error templates themselves fail to render.
const BARE_ERROR_BODY: &str =
    "<!DOCTYPE html><html><head><title>Blogly</title></head>\
     <body><h1>Something went wrong</h1></body></html>";

/// Page error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum PageError {
    /// Lookup by id failed (404, renders the not-found view)
    NotFound { message: String },

    /// Required field empty/overlong, or uniqueness violated (400)
    Constraint { reason: String },

    /// A foreign-key target vanished mid-request (409)
    ReferentialIntegrity { reason: String },

    /// Storage or template failure (500, logged, generic body)
    Internal { message: String },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, template, ctx) = match self {
            Self::NotFound { message } => {
                let mut ctx = Context::new();
                ctx.insert("message", &message);
                (StatusCode::NOT_FOUND, "not_found.html", ctx)
            }
            Self::Constraint { reason } => {
                (StatusCode::BAD_REQUEST, "error.html", error_ctx(400, &reason))
            }
            Self::ReferentialIntegrity { reason } => {
                (StatusCode::CONFLICT, "error.html", error_ctx(409, &reason))
            }
            Self::Internal { message } => {
                // Log the actual error, return a generic message
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error.html",
                    error_ctx(500, "an internal error occurred"),
                )
            }
        };

        match templates::render(template, &ctx) {
            Ok(body) => (status, body).into_response(),
            Err(err) => {
                tracing::error!("error page failed to render: {}", err);
                (status, Html(BARE_ERROR_BODY)).into_response()
            }
        }
    }
}

fn error_ctx(status: u16, reason: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("status", &status);
    ctx.insert("reason", reason);
    ctx
}

impl From<DataError> for PageError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::NotFound { resource, id } => Self::NotFound {
                message: format!("{resource} {id} not found"),
            },
            DataError::Constraint { reason } => Self::Constraint { reason },
            DataError::ReferentialIntegrity { reason } => Self::ReferentialIntegrity { reason },
            DataError::Storage(err) => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl From<ValidationError> for PageError {
    fn from(e: ValidationError) -> Self {
        Self::Constraint {
            reason: e.to_string(),
        }
    }
}

impl From<tera::Error> for PageError {
    fn from(e: tera::Error) -> Self {
        Self::Internal {
            message: format!("template error: {e}"),
        }
    }
}
