//! Simulated checkout.
//!
//! No payment is taken and no inventory is consumed. The order is stored
//! exactly as submitted, including client-supplied totals that may disagree
//! with the line items.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use roastery_core::Order;
use roastery_store::TypedStore;

use crate::error::ApiError;
use crate::extract::Validated;
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    /// The order to place.
    #[validate(nested)]
    pub order: Order,
}

/// Checkout response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Always `true`.
    pub ok: bool,
    /// Identifier of the stored order.
    pub order_id: String,
}

/// Place an order.
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Validated(CheckoutRequest { order }): Validated<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let order_id = state.store()?.insert_record(&order)?;

    tracing::info!(
        order_id = %order_id,
        user_email = %order.user_email,
        items = order.items.len(),
        total = order.total,
        "Order placed"
    );

    Ok(Json(CheckoutResponse {
        ok: true,
        order_id: order_id.to_string(),
    }))
}
