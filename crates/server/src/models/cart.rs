//! Cart domain types.
//!
//! The system tracks exactly one cart. Line items record how many units of
//! one product are currently in it; a line item exists only while its
//! quantity is at least 1.

use chrono::{DateTime, Utc};
use serde::Serialize;

use minimart_core::{CartId, CartItemId, ProductId};

/// The shopping cart.
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    /// Unique cart ID, assigned by the store on first creation.
    pub id: CartId,
    /// When the cart was last persisted.
    pub updated_at: DateTime<Utc>,
    /// Line items, at most one per distinct product.
    pub items: Vec<CartItem>,
}

/// A cart line item: the quantity of one product in the cart.
#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    /// Unique line item ID, assigned by the store.
    pub id: CartItemId,
    /// Owning cart (foreign-key style back-reference, persistence only).
    pub cart_id: CartId,
    /// The product this line counts. Loose reference into the catalog.
    pub product_id: ProductId,
    /// Units of the product in the cart. Always >= 1 while the item exists.
    pub quantity: i32,
}
