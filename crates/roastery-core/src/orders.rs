//! Checkout orders.
//!
//! Totals are taken exactly as the client supplies them. Nothing here checks
//! that `subtotal` or `total` agree with the line items, and no inventory is
//! consumed when an order is stored.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::kind::EntityKind;
use crate::schema::Schema;

/// Where an order stands. Stored as supplied, never transitioned here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting payment.
    Pending,
    /// Paid (the default for simulated checkouts).
    #[default]
    Paid,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled.
    Cancelled,
}

/// One line of an order. Only ever embedded in an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    /// Informal product reference; not checked against the catalog.
    pub product_id: String,
    /// Product title at time of purchase.
    pub title: String,
    /// Chosen bag size.
    pub size: String,
    /// Chosen grind.
    pub grind: String,
    /// Number of bags, at least one.
    #[validate(range(min = 1))]
    pub quantity: i64,
    /// Price per bag, never negative.
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
}

/// A simulated checkout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    /// Customer email.
    pub user_email: String,
    /// Line items; may be empty.
    #[validate(nested)]
    pub items: Vec<OrderItem>,
    /// Client-supplied subtotal.
    pub subtotal: f64,
    /// Client-supplied shipping cost.
    pub shipping: f64,
    /// Client-supplied grand total.
    pub total: f64,
    /// Order status, `paid` when omitted.
    #[serde(default)]
    pub status: OrderStatus,
    /// Free-form delivery address.
    #[serde(default)]
    pub shipping_address: Option<String>,
}

impl Schema for Order {
    const KIND: EntityKind = EntityKind::Order;
}
