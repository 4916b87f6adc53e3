//! Domain types served and persisted by the API.

pub mod cart;
pub mod post;
pub mod product;

pub use cart::{Cart, CartItem};
pub use post::Post;
pub use product::Product;
