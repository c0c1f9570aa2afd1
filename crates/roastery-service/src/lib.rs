//! Roastery HTTP API service.
//!
//! Serves the public catalog (products, testimonials, blog), accepts
//! wholesale, contact and newsletter submissions, takes simulated checkouts,
//! and lets an operator add products. Every body is validated against its
//! `roastery-core` schema before it is stored, and every stored record is
//! validated again before it is returned.
//!
//! There is no authentication.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers are synchronous over the store

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ServiceConfig, StoreBackend};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
