//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{admin, catalog, checkout, forms, health};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /` - Banner
/// - `GET /health` - Health check
///
/// ## Catalog
/// - `GET /api/products` - List products
/// - `GET /api/products/:slug` - Get a product
/// - `GET /api/testimonials` - List testimonials
/// - `GET /api/blog` - List blog posts
/// - `GET /api/blog/:slug` - Get a blog post
///
/// ## Submissions
/// - `POST /api/wholesale` - Wholesale inquiry
/// - `POST /api/contact` - Contact message
/// - `POST /api/subscribe` - Newsletter subscription
/// - `POST /api/checkout` - Simulated checkout
///
/// ## Admin
/// - `POST /api/admin/product` - Create a product
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    let api_routes = Router::new()
        // Catalog
        .route("/products", get(catalog::list_products))
        .route("/products/:slug", get(catalog::get_product))
        .route("/testimonials", get(catalog::list_testimonials))
        .route("/blog", get(catalog::list_posts))
        .route("/blog/:slug", get(catalog::get_post))
        // Submissions
        .route("/wholesale", post(forms::submit_wholesale))
        .route("/contact", post(forms::submit_contact))
        .route("/subscribe", post(forms::subscribe))
        .route("/checkout", post(checkout::checkout))
        // Admin
        .route("/admin/product", post(admin::create_product));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
