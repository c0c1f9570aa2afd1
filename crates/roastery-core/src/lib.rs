//! Core types and schemas for the roastery catalog service.
//!
//! This crate defines every entity the service stores and the rules used to
//! validate them:
//!
//! - **Catalog**: `Product`, `Testimonial`, `BlogPost`
//! - **Orders**: `Order`, `OrderItem`, `OrderStatus`
//! - **Forms**: `WholesaleInquiry`, `ContactMessage`, `NewsletterSubscription`, `User`
//! - **Schema primitives**: `Schema`, `parse`
//! - **Collections**: `EntityKind`, the closed set of stored entity kinds
//! - **Identifiers**: `DocumentId`
//!
//! # Validation
//!
//! A candidate record is a JSON object. `Schema::from_value` either returns
//! the typed record with defaults applied or a `ValidationErrors` naming the
//! offending fields. The same check runs on documents read back from the
//! store before they are returned to clients.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod error;
pub mod forms;
pub mod ids;
pub mod kind;
pub mod orders;
pub mod schema;

pub use catalog::{
    default_grind_options, default_size_options, BlogPost, Product, RoastLevel, Testimonial,
    DEFAULT_INVENTORY, DEFAULT_RATING,
};
pub use error::{FieldError, Result, ValidationErrors, Violation};
pub use forms::{ContactMessage, NewsletterSubscription, User, WholesaleInquiry};
pub use ids::{DocumentId, IdError};
pub use kind::{EntityKind, UnknownCollection};
pub use orders::{Order, OrderItem, OrderStatus};
pub use schema::{parse, Fields, Schema};
