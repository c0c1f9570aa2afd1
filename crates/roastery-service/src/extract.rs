//! Request body extractor that runs schema validation.
//!
//! Malformed JSON and non-object bodies are reported the same way as schema
//! violations: a 422 naming the `body` field.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use roastery_core::{ValidationErrors, Violation};

use crate::error::ApiError;

/// A body deserialized and validated as `T`, with defaults applied.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let detail = rejection.body_text();
                tracing::debug!(error = %detail, "Rejected request body");
                ValidationErrors::single("body", Violation::WrongType { detail })
            })?;

        let record = roastery_core::parse::<T>(&value).map_err(|errors| {
            let errors = if errors.first().violation == Violation::NotAnObject {
                ValidationErrors::single("body", Violation::NotAnObject)
            } else {
                errors
            };
            tracing::debug!(error = %errors, "Rejected submission");
            errors
        })?;
        Ok(Self(record))
    }
}
