//! Health check handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Root banner response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Banner text.
    pub message: String,
}

/// Root endpoint.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Specialty Coffee API running".to_string(),
    })
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Store status: `connected`, `error` or `unavailable`.
    pub store: String,
    /// Document count per collection, when the store is reachable.
    /// Estimated on the RocksDB backend.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub collections: BTreeMap<&'static str, usize>,
}

/// Health check endpoint.
///
/// Always answers 200; the `store` field reports whether the document store
/// can be reached.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (store, collections) = match state.store() {
        Err(_) => ("unavailable", BTreeMap::new()),
        Ok(store) => match store.collections() {
            Ok(counts) => (
                "connected",
                counts
                    .into_iter()
                    .map(|(kind, count)| (kind.collection(), count))
                    .collect(),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Store health check failed");
                ("error", BTreeMap::new())
            }
        },
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        service: "roastery".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
        collections,
    })
}
