//! API integration tests against a running server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:4000/api";

/// ISBN unlikely to collide with data already on the server
fn unique_isbn() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{:013}", nanos % 10_000_000_000_000)
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
async fn test_add_book_then_list() {
    let client = Client::new();
    let isbn = unique_isbn();

    let response = client
        .post(format!("{}/book/addbook", BASE_URL))
        .json(&json!({ "isbn": isbn, "name": "Integration Test Book" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);

    let body: Value = client
        .get(format!("{}/book/listbook", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let matching = body["data"]
        .as_array()
        .expect("No data array")
        .iter()
        .filter(|book| book["isbn"] == isbn.as_str())
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
#[ignore]
async fn test_add_duplicate_book() {
    let client = Client::new();
    let isbn = unique_isbn();
    let payload = json!({ "isbn": isbn, "name": "Duplicate Test Book" });

    client
        .post(format!("{}/book/addbook", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = client
        .post(format!("{}/book/addbook", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Book Already Exist with this ISBN number");
}

#[tokio::test]
#[ignore]
async fn test_concurrent_duplicate_adds() {
    let client = Client::new();
    let isbn = unique_isbn();

    let requests = (0..5).map(|_| {
        client
            .post(format!("{}/book/addbook", BASE_URL))
            .json(&json!({ "isbn": isbn, "name": "Race Test Book" }))
            .send()
    });

    let mut successes = 0;
    for response in join_spawned(requests).await {
        let body: Value = response
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response");
        if body["success"] == true {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
}

async fn join_spawned<F, T>(futures: impl Iterator<Item = F>) -> Vec<T>
where
    F: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.expect("task panicked"));
    }
    results
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/user/login", BASE_URL))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
}
