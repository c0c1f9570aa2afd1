//! Public catalog entities: products, testimonials and blog posts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::kind::EntityKind;
use crate::schema::Schema;

// ============================================================================
// Defaults
// ============================================================================

/// Default units in stock for a new product.
pub const DEFAULT_INVENTORY: i64 = 100;

/// Default average rating for a new product.
pub const DEFAULT_RATING: f64 = 4.8;

/// Grind options offered when a product does not list its own.
#[must_use]
pub fn default_grind_options() -> Vec<String> {
    ["whole bean", "espresso", "filter", "french press"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Bag sizes offered when a product does not list its own.
#[must_use]
pub fn default_size_options() -> Vec<String> {
    ["250g", "500g", "1kg"].into_iter().map(String::from).collect()
}

const fn default_inventory() -> i64 {
    DEFAULT_INVENTORY
}

const fn default_rating() -> f64 {
    DEFAULT_RATING
}

const fn default_in_stock() -> bool {
    true
}

// ============================================================================
// Product
// ============================================================================

/// How dark a coffee is roasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    /// Light roast.
    Light,
    /// Medium roast.
    Medium,
    /// Dark roast.
    Dark,
}

/// A coffee sold in the catalog.
///
/// `slug` is the external lookup key. The store does not enforce its
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Display title.
    pub title: String,
    /// URL-friendly lookup key.
    pub slug: String,
    /// Long description.
    pub description: String,
    /// Base price in USD, never negative.
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Roast level.
    pub roast_level: RoastLevel,
    /// Country or region of origin.
    #[serde(default)]
    pub origin: Option<String>,
    /// Tasting notes.
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    /// Available grinds.
    #[serde(default = "default_grind_options")]
    pub grind_options: Vec<String>,
    /// Available bag sizes.
    #[serde(default = "default_size_options")]
    pub size_options: Vec<String>,
    /// Whether the product can be purchased.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Virtual stock count, never negative.
    #[serde(default = "default_inventory")]
    #[validate(range(min = 0))]
    pub inventory: i64,
    /// Average rating in `[0, 5]`.
    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    /// Search and filter tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// A product with every optional field at its default.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        roast_level: RoastLevel,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            description: description.into(),
            price,
            images: Vec::new(),
            roast_level,
            origin: None,
            flavor_notes: Vec::new(),
            grind_options: default_grind_options(),
            size_options: default_size_options(),
            in_stock: true,
            inventory: DEFAULT_INVENTORY,
            rating: DEFAULT_RATING,
            tags: Vec::new(),
        }
    }
}

impl Schema for Product {
    const KIND: EntityKind = EntityKind::Product;
}

// ============================================================================
// Testimonial
// ============================================================================

/// A customer quote shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    /// Customer name.
    pub name: String,
    /// Star rating in `[1, 5]`.
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
    /// The quote.
    pub comment: String,
    /// Optional portrait URL.
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Schema for Testimonial {
    const KIND: EntityKind = EntityKind::Testimonial;
}

// ============================================================================
// Blog
// ============================================================================

/// A journal article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BlogPost {
    /// Headline.
    pub title: String,
    /// URL-friendly lookup key.
    pub slug: String,
    /// Teaser shown in listings.
    pub excerpt: String,
    /// Full body.
    pub content: String,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional header image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl Schema for BlogPost {
    const KIND: EntityKind = EntityKind::BlogPost;
}
