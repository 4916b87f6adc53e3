//! Cart route handlers.
//!
//! The cart is a singleton, created lazily on first access. Add and remove
//! move one unit at a time and respond with the updated cart, so clients
//! never need a second round trip to see the new quantities.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use minimart_core::ProductId;

use crate::error::Result;
use crate::models::Cart;
use crate::state::AppState;

/// Show the cart, creating it if none exists yet.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<Cart>> {
    let cart = state.cart().get_or_create_cart().await?;
    Ok(Json(cart))
}

/// Add one unit of a product to the cart.
///
/// The product ID is not checked against the catalog; the cart is
/// permissive about dangling references.
#[instrument(skip(state))]
pub async fn add_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Cart>> {
    let cart = state.cart().add_product(product_id).await?;
    Ok(Json(cart))
}

/// Remove one unit of a product from the cart.
///
/// Removing a product that is not in the cart is a no-op; the unchanged
/// cart is returned either way.
#[instrument(skip(state))]
pub async fn remove_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Cart>> {
    let cart = state.cart().remove_product(product_id).await?;
    Ok(Json(cart))
}
