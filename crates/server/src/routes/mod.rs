//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (database)
//!
//! # Posts
//! GET    /api/posts                - List posts
//! POST   /api/posts                - Create post (201 + Location)
//! GET    /api/posts/{id}           - Post detail
//! PUT    /api/posts/{id}           - Replace post
//! DELETE /api/posts/{id}           - Delete post (204)
//!
//! # Products
//! GET    /api/products             - List products
//! POST   /api/products             - Create product (201 + Location)
//! GET    /api/products/{id}        - Product detail
//! PUT    /api/products/{id}        - Replace product
//! DELETE /api/products/{id}        - Delete product (204)
//!
//! # Cart
//! GET    /api/cart                 - The cart (created lazily)
//! POST   /api/cart/products/{id}   - Add one unit of a product
//! DELETE /api/cart/products/{id}   - Remove one unit of a product
//! ```

pub mod cart;
pub mod posts;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the post routes router.
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::index).post(posts::create))
        .route(
            "/{id}",
            get(posts::show).put(posts::update).delete(posts::destroy),
        )
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/", get(cart::show)).route(
        "/products/{product_id}",
        post(cart::add_product).delete(cart::remove_product),
    )
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/posts", post_routes())
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
}
