//! Common test utilities for roastery integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};

use roastery_service::{create_router, AppState, ServiceConfig, StoreBackend};
use roastery_store::{MemoryStore, Store};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The store behind the server, for seeding and inspection.
    pub store: Option<Arc<dyn Store>>,
}

impl TestHarness {
    /// Create a new test harness over a fresh in-memory store.
    pub fn new() -> Self {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        Self::with_store(Some(store), StoreBackend::Memory)
    }

    /// Create a harness whose document store was never initialized.
    pub fn without_store() -> Self {
        Self::with_store(None, StoreBackend::Disabled)
    }

    fn with_store(store: Option<Arc<dyn Store>>, store_backend: StoreBackend) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            store_backend,
            ..ServiceConfig::default()
        };

        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, store }
    }

    /// The backing store. Panics for a harness built without one.
    pub fn store(&self) -> &dyn Store {
        self.store.as_deref().expect("harness has no store")
    }

    /// Add a product through the admin endpoint.
    pub async fn add_product(&self, product: &Value) {
        self.server
            .post("/api/admin/product")
            .json(product)
            .await
            .assert_status_ok();
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal valid product body.
pub fn product(title: &str, slug: &str, price: f64) -> Value {
    json!({
        "title": title,
        "slug": slug,
        "description": format!("{title}, freshly roasted."),
        "price": price,
        "roast_level": "medium"
    })
}

/// A one-item order body with the given totals.
pub fn order(subtotal: f64, shipping: f64, total: f64) -> Value {
    json!({
        "user_email": "ada@example.com",
        "items": [{
            "product_id": "ethiopia-yirgacheffe",
            "title": "Ethiopia Yirgacheffe",
            "size": "250g",
            "grind": "whole bean",
            "quantity": 2,
            "unit_price": 18.5
        }],
        "subtotal": subtotal,
        "shipping": shipping,
        "total": total
    })
}

/// The `field` names listed in a validation failure body.
pub fn failed_fields(body: &Value) -> Vec<String> {
    body["error"]["details"]["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
