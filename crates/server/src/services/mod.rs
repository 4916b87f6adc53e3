//! Application services.

pub mod cart;

pub use cart::{CartService, CartStore};
