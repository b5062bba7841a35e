//! In-process HTTP tests: the full router over the in-memory record store

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api, repository::Repository, AppConfig, AppState};

fn app() -> Router {
    api::router(AppState::new(AppConfig::default(), Repository::in_memory()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_root_reports_api_working() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"API WORKING");
}

#[tokio::test]
async fn test_list_books_empty() {
    let app = app();
    let (status, body) = get_json(&app, "/api/book/listbook").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": []}));
}

#[tokio::test]
async fn test_add_list_and_duplicate_book() {
    let app = app();
    let book = json!({"isbn": "9780134190440", "name": "The C Programming Language"});

    let (status, body) = post_json(&app, "/api/book/addbook", book.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Book added successfully"})
    );

    let (_, body) = get_json(&app, "/api/book/listbook").await;
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["isbn"], "9780134190440");
    assert_eq!(data[0]["name"], "The C Programming Language");
    assert!(data[0]["id"].is_string());

    let (status, body) = post_json(&app, "/api/book/addbook", book).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": false, "message": "Book Already Exist with this ISBN number"})
    );

    let (_, body) = get_json(&app, "/api/book/listbook").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_book_missing_name_is_rejected() {
    let app = app();
    let (status, body) = post_json(&app, "/api/book/addbook", json!({"isbn": "123"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": false, "message": "Please enter both ISBN and Book Name"})
    );

    let (_, body) = get_json(&app, "/api/book/listbook").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_malformed_body_gets_failure_envelope() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/book/addbook")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_register_and_login() {
    let app = app();

    let (_, body) = post_json(
        &app,
        "/api/user/register",
        json!({"name": "Ada", "email": "ada@example.com", "password": "analytical"}),
    )
    .await;
    assert_eq!(
        body,
        json!({"success": true, "message": "User registered successfully"})
    );

    let (_, body) = post_json(
        &app,
        "/api/user/register",
        json!({"name": "Ada", "email": "ADA@example.com", "password": "analytical"}),
    )
    .await;
    assert_eq!(
        body,
        json!({"success": false, "message": "User already exists"})
    );

    let (status, body) = post_json(
        &app,
        "/api/user/login",
        json!({"email": "ada@example.com", "password": "analytical"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    assert!(body["token"].is_string());

    let (status, body) = post_json(
        &app,
        "/api/user/login",
        json!({"email": "ada@example.com", "password": "wrong-one"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": false, "message": "Invalid credentials"})
    );
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = app();
    let (_, body) = post_json(
        &app,
        "/api/user/login",
        json!({"email": "ghost@example.com", "password": "whatever"}),
    )
    .await;
    assert_eq!(
        body,
        json!({"success": false, "message": "User doesn't exist"})
    );
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = app();

    let (status, body) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(&app, "/api/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/api/book/listbook")
        .header(header::ORIGIN, "http://192.168.1.6:8081")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
