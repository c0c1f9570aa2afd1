//! The closed set of persisted entity kinds.
//!
//! Each kind owns exactly one collection in the document store. The
//! collection name is the lower-cased entity type name.

use std::fmt;
use std::str::FromStr;

/// Tag for every entity kind that can be stored as a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Catalog product.
    Product,
    /// Customer testimonial.
    Testimonial,
    /// Blog article.
    BlogPost,
    /// Customer profile.
    User,
    /// Checkout order.
    Order,
    /// Wholesale inquiry form submission.
    WholesaleInquiry,
    /// Contact form submission.
    ContactMessage,
    /// Newsletter sign-up.
    NewsletterSubscription,
}

impl EntityKind {
    /// Every entity kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Product,
        Self::Testimonial,
        Self::BlogPost,
        Self::User,
        Self::Order,
        Self::WholesaleInquiry,
        Self::ContactMessage,
        Self::NewsletterSubscription,
    ];

    /// Name of the collection holding documents of this kind.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Testimonial => "testimonial",
            Self::BlogPost => "blogpost",
            Self::User => "user",
            Self::Order => "order",
            Self::WholesaleInquiry => "wholesaleinquiry",
            Self::ContactMessage => "contactmessage",
            Self::NewsletterSubscription => "newslettersubscription",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Error returned when a collection name matches no entity kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for EntityKind {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.collection() == s)
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}
