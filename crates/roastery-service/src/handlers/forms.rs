//! Form submission handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use roastery_core::{ContactMessage, NewsletterSubscription, Schema, WholesaleInquiry};
use roastery_store::TypedStore;

use crate::error::ApiError;
use crate::extract::Validated;
use crate::state::AppState;

/// Acknowledgement returned by every form endpoint.
#[derive(Debug, Serialize)]
pub struct Ack {
    /// Always `true`; failures are reported as errors.
    pub ok: bool,
}

impl Ack {
    /// A successful acknowledgement.
    #[must_use]
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

/// Persist a validated submission and acknowledge it.
pub(crate) fn store_submission<T: Schema>(
    state: &AppState,
    record: &T,
) -> Result<Json<Ack>, ApiError> {
    let id = state.store()?.insert_record(record)?;
    tracing::info!(collection = %T::KIND, id = %id, "Submission stored");
    Ok(Json(Ack::ok()))
}

/// Submit a wholesale inquiry.
pub async fn submit_wholesale(
    State(state): State<Arc<AppState>>,
    Validated(inquiry): Validated<WholesaleInquiry>,
) -> Result<Json<Ack>, ApiError> {
    store_submission(&state, &inquiry)
}

/// Submit a contact message.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Validated(message): Validated<ContactMessage>,
) -> Result<Json<Ack>, ApiError> {
    store_submission(&state, &message)
}

/// Subscribe to the newsletter.
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Validated(subscription): Validated<NewsletterSubscription>,
) -> Result<Json<Ack>, ApiError> {
    store_submission(&state, &subscription)
}
