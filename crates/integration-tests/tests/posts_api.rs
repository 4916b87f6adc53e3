//! Integration tests for the post REST API.
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
async fn post_crud_lifecycle() {
    let client = client();
    let base_url = base_url();

    // Create
    let resp = client
        .post(format!("{base_url}/api/posts"))
        .json(&json!({"title": "title", "body": "body"}))
        .send()
        .await
        .expect("Failed to create post");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp
        .headers()
        .get("location")
        .expect("Location header")
        .to_str()
        .expect("Location header is valid UTF-8")
        .to_string();
    let created: Value = resp.json().await.expect("Failed to read created post");
    assert_eq!(created["title"], "title");

    // The new post shows up in the listing
    let resp = client
        .get(format!("{base_url}/api/posts"))
        .send()
        .await
        .expect("Failed to list posts");
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Value> = resp.json().await.expect("Failed to parse listing");
    assert!(posts.iter().any(|post| post["id"] == created["id"]));

    // Fetch by Location
    let resp = client
        .get(format!("{base_url}{location}"))
        .send()
        .await
        .expect("Failed to get post");
    assert_eq!(resp.status(), StatusCode::OK);
    let post: Value = resp.json().await.expect("Failed to parse post");
    assert_eq!(post["title"], "title");
    assert_eq!(post["body"], "body");

    // Replace
    let resp = client
        .put(format!("{base_url}{location}"))
        .json(&json!({"title": "new title", "body": "new body"}))
        .send()
        .await
        .expect("Failed to update post");
    assert_eq!(resp.status(), StatusCode::OK);
    let post: Value = resp.json().await.expect("Failed to parse updated post");
    assert_eq!(post["title"], "new title");

    // Delete, then the post is gone
    let resp = client
        .delete(format!("{base_url}{location}"))
        .send()
        .await
        .expect("Failed to delete post");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base_url}{location}"))
        .send()
        .await
        .expect("Failed to re-fetch post");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn missing_post_is_not_found() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/api/posts/999999"))
        .send()
        .await
        .expect("Failed to get post");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
