//! Form submissions and customer profiles.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::kind::EntityKind;
use crate::schema::Schema;

/// A request for wholesale pricing from a cafe or retailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WholesaleInquiry {
    /// Contact name.
    pub name: String,
    /// Business name.
    pub business_name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Expected volume, free-form (e.g. "20kg / month").
    pub volume_needed: String,
    /// Optional message.
    #[serde(default)]
    pub message: Option<String>,
}

impl Schema for WholesaleInquiry {
    const KIND: EntityKind = EntityKind::WholesaleInquiry;
}

/// A message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Message body.
    pub message: String,
}

impl Schema for ContactMessage {
    const KIND: EntityKind = EntityKind::ContactMessage;
}

/// A newsletter sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewsletterSubscription {
    /// Subscriber email.
    pub email: String,
}

impl Schema for NewsletterSubscription {
    const KIND: EntityKind = EntityKind::NewsletterSubscription;
}

/// A customer profile. No endpoint writes users yet; the schema is kept so
/// the collection set stays complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional postal address.
    #[serde(default)]
    pub address: Option<String>,
}

impl Schema for User {
    const KIND: EntityKind = EntityKind::User;
}
