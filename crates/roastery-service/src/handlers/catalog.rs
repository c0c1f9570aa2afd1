//! Public catalog handlers: products, testimonials and the blog.
//!
//! Every record is revalidated on the way out and returned without its
//! storage identifier. Lookups by slug return the first match.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use roastery_core::{BlogPost, Product, Testimonial};
use roastery_store::{Filter, TypedStore};

use crate::error::ApiError;
use crate::state::AppState;

/// List every product.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store()?.find_all::<Product>(&Filter::all(), None)?;
    Ok(Json(products))
}

/// Get one product by slug.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .store()?
        .find_one::<Product>(&Filter::eq("slug", slug))?
        .ok_or_else(|| ApiError::NotFound("Product not found".into()))?;

    Ok(Json(product))
}

/// List every testimonial.
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = state
        .store()?
        .find_all::<Testimonial>(&Filter::all(), None)?;
    Ok(Json(testimonials))
}

/// List every blog post.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.store()?.find_all::<BlogPost>(&Filter::all(), None)?;
    Ok(Json(posts))
}

/// Get one blog post by slug.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state
        .store()?
        .find_one::<BlogPost>(&Filter::eq("slug", slug))?
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))?;

    Ok(Json(post))
}
