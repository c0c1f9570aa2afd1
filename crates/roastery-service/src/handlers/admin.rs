//! Catalog administration.
//!
//! There is no authentication on these routes.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use roastery_core::Product;

use crate::error::ApiError;
use crate::extract::Validated;
use crate::handlers::forms::{store_submission, Ack};
use crate::state::AppState;

/// Add a product to the catalog.
///
/// Slugs are not checked for uniqueness; a later product with the same slug
/// is stored alongside the earlier one, and lookups return the earlier one.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Validated(product): Validated<Product>,
) -> Result<Json<Ack>, ApiError> {
    store_submission(&state, &product)
}
