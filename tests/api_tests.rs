//! API integration tests
//!
//! Run against a live server with a reachable MongoDB:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to create a book and return its identifier
async fn create_book(client: &Client, name: &str, category: &str, author: &str) -> String {
    let response = client
        .post(format!("{}/api/books", BASE_URL))
        .json(&json!({
            "name": name,
            "price": 9.99,
            "category": category,
            "author": author
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .expect("No Location header")
        .to_str()
        .unwrap()
        .to_string();

    let body: Value = response.json().await.expect("Failed to parse response");
    let id = body["id"].as_str().expect("No id in response").to_string();
    assert_eq!(location, format!("/api/books/{}", id));
    assert_eq!(id.len(), 24);
    id
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_pings_store() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_book_round_trip() {
    let client = Client::new();
    let id = create_book(&client, "The Hobbit", "Fantasy", "Tolkien").await;

    // Fetch it back
    let response = client
        .get(format!("{}/api/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "The Hobbit");
    assert_eq!(body["author"], "Tolkien");

    // Replace it
    let response = client
        .put(format!("{}/api/books/{}", BASE_URL, id))
        .json(&json!({
            "name": "The Hobbit",
            "price": 12.50,
            "category": "Fantasy",
            "author": "J.R.R. Tolkien"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Delete it
    let response = client
        .delete(format!("{}/api/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Fetching the deleted id is a 404
    let response = client
        .get(format!("{}/api/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_nonexistent_book_is_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/api/books/ffffffffffffffffffffffff", BASE_URL))
        .json(&json!({
            "name": "Ghost",
            "price": 1.0,
            "category": "None",
            "author": "Nobody"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books_with_keyword() {
    let client = Client::new();
    create_book(&client, "Warcraft Chronicles", "Fantasy", "Metzen").await;

    let response = client
        .get(format!(
            "{}/api/books/get-all?pageNumber=1&pageSize=10&keyword=war",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected an array");
    assert!(books
        .iter()
        .all(|b| b["name"].as_str().unwrap().to_lowercase().contains("war")));
}

#[tokio::test]
#[ignore]
async fn test_get_with_delimited_filter() {
    let client = Client::new();
    create_book(&client, "The Silmarillion", "Fiction", "Tolkien").await;

    let response = client
        .get(format!(
            "{}/api/books/get-with-filter?pageNumber=1&pageSize=10&filterEqual=category:Fiction,author:Tolkien",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    for book in body.as_array().expect("Expected an array") {
        assert_eq!(book["category"], "Fiction");
        assert_eq!(book["author"], "Tolkien");
    }
}

#[tokio::test]
#[ignore]
async fn test_get_with_malformed_filter_is_400() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/books/get-with-filter?filterEqual=nocolon",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "InvalidFilter");
}

#[tokio::test]
#[ignore]
async fn test_create_json_params() {
    let client = Client::new();

    let response = client
        .post(format!(
            "{}/api/books/create-json-params?category=Fiction&author=Tolkien",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let text = response.text().await.expect("Failed to read response");
    let parsed: Value = serde_json::from_str(&text).expect("Response is not JSON");
    assert_eq!(parsed["category"], "Fiction");
    assert_eq!(parsed["author"], "Tolkien");
}

#[tokio::test]
#[ignore]
async fn test_add_and_list_users() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/books/add-user", BASE_URL))
        .json(&json!({
            "login": "reader1",
            "likes": ["fantasy", "sci-fi"]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/api/books/get-user-list", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let users = body.as_array().expect("Expected an array");
    assert!(users.iter().any(|u| u["login"] == "reader1"));
}
