//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use roastery_core::{FieldError, ValidationErrors};
use roastery_store::StoreError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The document store is unreachable or not initialized.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

/// One offending field in a validation failure response.
#[derive(Debug, Serialize)]
struct FieldDetail<'a> {
    field: &'a str,
    violation: &'a roastery_core::Violation,
    message: String,
}

impl<'a> From<&'a FieldError> for FieldDetail<'a> {
    fn from(error: &'a FieldError) -> Self {
        Self {
            field: &error.field,
            violation: &error.violation,
            message: error.violation.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::Validation(errors) => {
                let fields: Vec<FieldDetail<'_>> =
                    errors.errors().iter().map(FieldDetail::from).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "validation_failed",
                    self.to_string(),
                    Some(serde_json::json!({ "errors": fields })),
                )
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            Self::StoreUnavailable(msg) => {
                tracing::error!(error = %msg, "Document store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "store_unavailable",
                    "The document store is not available".to_string(),
                    None,
                )
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => Self::StoreUnavailable(msg),
            StoreError::Database(_)
            | StoreError::Serialization(_)
            | StoreError::InvalidDocument { .. } => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roastery_core::Violation;

    #[test]
    fn store_errors_map_to_server_errors() {
        let unavailable = ApiError::from(StoreError::Unavailable("down".into()));
        assert_eq!(
            unavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        let database = ApiError::from(StoreError::Database("corrupt".into()));
        assert_eq!(
            database.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_is_unprocessable() {
        let err = ApiError::from(ValidationErrors::single("slug", Violation::Missing));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_is_distinct_from_store_errors() {
        let err = ApiError::NotFound("Product not found".into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
