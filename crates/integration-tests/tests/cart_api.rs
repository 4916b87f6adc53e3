//! Integration tests for the cart flow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p minimart-server)
//!
//! The cart is a singleton, so these tests share it with anything else
//! using the server; each test cleans up the products it adds.
//!
//! Run with: cargo test -p minimart-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use minimart_integration_tests::{base_url, client};

/// Create a product and return its id.
async fn create_product(client: &Client, base_url: &str, name: &str) -> i64 {
    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&json!({"name": name, "description": "cart test product"}))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Value = resp.json().await.expect("Failed to read product");
    product["id"].as_i64().expect("product id")
}

async fn delete_product(client: &Client, base_url: &str, id: i64) {
    let _ = client
        .delete(format!("{base_url}/api/products/{id}"))
        .send()
        .await;
}

fn quantity_of(cart: &Value, product_id: i64) -> Option<i64> {
    cart["items"]
        .as_array()
        .expect("items array")
        .iter()
        .find(|item| item["product_id"] == product_id)
        .map(|item| item["quantity"].as_i64().expect("quantity"))
}

async fn cart_request(client: &Client, method: reqwest::Method, url: String) -> Value {
    let resp = client
        .request(method, url)
        .send()
        .await
        .expect("Cart request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse cart")
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn cart_add_and_remove_walkthrough() {
    let client = client();
    let base_url = base_url();
    let product_id = create_product(&client, &base_url, "walkthrough").await;
    let item_url = format!("{base_url}/api/cart/products/{product_id}");

    // The cart exists (created lazily) and does not have this product yet
    let cart = cart_request(&client, reqwest::Method::GET, format!("{base_url}/api/cart")).await;
    assert_eq!(quantity_of(&cart, product_id), None);

    // Two adds accumulate
    let cart = cart_request(&client, reqwest::Method::POST, item_url.clone()).await;
    assert_eq!(quantity_of(&cart, product_id), Some(1));
    let cart = cart_request(&client, reqwest::Method::POST, item_url.clone()).await;
    assert_eq!(quantity_of(&cart, product_id), Some(2));

    // Removes walk back down to absent
    let cart = cart_request(&client, reqwest::Method::DELETE, item_url.clone()).await;
    assert_eq!(quantity_of(&cart, product_id), Some(1));
    let cart = cart_request(&client, reqwest::Method::DELETE, item_url.clone()).await;
    assert_eq!(quantity_of(&cart, product_id), None);

    // A further remove is a no-op
    let cart = cart_request(&client, reqwest::Method::DELETE, item_url).await;
    assert_eq!(quantity_of(&cart, product_id), None);

    delete_product(&client, &base_url, product_id).await;
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn cart_id_is_stable_across_requests() {
    let client = client();
    let base_url = base_url();

    let first = cart_request(&client, reqwest::Method::GET, format!("{base_url}/api/cart")).await;
    let second = cart_request(&client, reqwest::Method::GET, format!("{base_url}/api/cart")).await;
    assert_eq!(first["id"], second["id"]);
}
