//! Integration tests for Minimart.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database, migrate, and launch the server
//! cargo run -p minimart-cli -- migrate
//! cargo run -p minimart-server
//!
//! # Run integration tests (ignored by default)
//! cargo test -p minimart-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `posts_api` - Post REST API tests
//! - `products_api` - Product REST API tests
//! - `cart_api` - Cart flow tests

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("MINIMART_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client for the tests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}
