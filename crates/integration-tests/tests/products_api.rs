//! Integration tests for the product REST API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p minimart-server)
//!
//! Run with: cargo test -p minimart-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use minimart_integration_tests::{base_url, client};

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn product_crud_lifecycle() {
    let client = client();
    let base_url = base_url();

    // Create
    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&json!({"name": "name", "description": "description"}))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get("location")
        .expect("Location header")
        .to_str()
        .expect("Location header is valid UTF-8")
        .to_string();
    let created: Value = resp.json().await.expect("Failed to read created product");

    // The new product shows up in the listing
    let resp = client
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse listing");
    assert!(products.iter().any(|product| product["id"] == created["id"]));

    // Fetch by Location
    let resp = client
        .get(format!("{base_url}{location}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);
    let product: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(product["name"], "name");
    assert_eq!(product["description"], "description");

    // Delete, then the product is gone
    let resp = client
        .delete(format!("{base_url}{location}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}{location}"))
        .send()
        .await
        .expect("Failed to re-fetch product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
