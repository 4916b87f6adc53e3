//! Catalog product domain type.

use serde::Serialize;

use minimart_core::ProductId;

/// A catalog product.
///
/// The cart references products by id only; nothing in the cart depends on
/// the rest of this type.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
}
