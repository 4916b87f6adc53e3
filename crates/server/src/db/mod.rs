//! Database operations for Minimart `PostgreSQL`.
//!
//! ## Tables
//!
//! - `posts` - Blog posts
//! - `products` - Catalog products
//! - `carts` - The singleton shopping cart
//! - `cart_items` - Cart line items (quantity per product)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p minimart-cli -- migrate
//! ```

pub mod cart;
#[cfg(test)]
pub mod memory;
pub mod posts;
pub mod products;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use cart::PgCartStore;
pub use posts::PostRepository;
pub use products::ProductRepository;

/// Errors that can occur during repository operations.
///
/// The taxonomy is deliberately narrow: any storage failure surfaces as
/// `Database` and propagates unchanged to the caller. Nothing at this
/// layer retries or translates.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
