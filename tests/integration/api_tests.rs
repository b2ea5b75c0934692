//! API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api::create_router, config::AppConfig, AppState};

/// Helper to build a fresh application with the demo products loaded
async fn app() -> Router {
    let state = AppState::new(AppConfig::default())
        .await
        .expect("Failed to build application state");
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn book(title: &str, isbn: &str) -> Value {
    json!({
        "title": title,
        "author": "Tech Writer",
        "isbn": isbn,
        "year": 2020,
        "rating": 4.5,
        "tags": ["python", "fastapi"],
        "price": 25.0
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_book_success() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(book("fastapi for beginners", "978-1234567890")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["book"]["id"], 1);
    assert_eq!(body["data"]["book"]["title"], "Fastapi For Beginners");
    assert_eq!(body["data"]["book"]["is_available"], true);
    assert_eq!(body["data"]["book"]["is_bestseller"], false);
}

#[tokio::test]
async fn test_create_book_duplicate_isbn() {
    let app = app().await;

    send(&app, "POST", "/books", Some(book("Book One", "978-1234567890"))).await;
    let (status, body) = send(&app, "POST", "/books", Some(book("Book Two", "978-1234567890"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["type"], "DuplicateKeyError");
    assert_eq!(body["error"]["status_code"], 400);

    let (_, body) = send(&app, "GET", "/books", None).await;
    assert_eq!(body["data"]["total"], 1);
}

#[tokio::test]
async fn test_create_book_invalid_fields() {
    let app = app().await;

    let mut bestseller = book("Mediocre Hit", "978-1111111111");
    bestseller["is_bestseller"] = json!(true);
    bestseller["rating"] = json!(3.9);
    let (status, body) = send(&app, "POST", "/books", Some(bestseller)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "InvalidFieldError");

    let mut cheap_classic = book("Old Tale", "978-2222222222");
    cheap_classic["year"] = json!(1850);
    cheap_classic["price"] = json!(4.0);
    let (status, _) = send(&app, "POST", "/books", Some(cheap_classic.clone())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    cheap_classic["price"] = json!(5.0);
    let (status, _) = send(&app, "POST", "/books", Some(cheap_classic)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_borrow_return_scenario() {
    let app = app().await;

    let dune = json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "isbn": "978-0441172719",
        "year": 1965,
        "rating": 4.8,
        "price": 12.0
    });
    let (status, body) = send(&app, "POST", "/books", Some(dune)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["book"]["id"], 1);

    let (status, body) = send(&app, "POST", "/books/1/borrow", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["is_available"], false);

    let (status, body) = send(&app, "POST", "/books/1/borrow", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["type"], "NotAvailableError");

    let (status, body) = send(&app, "POST", "/books/1/return", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["is_available"], true);

    let (status, body) = send(&app, "POST", "/books/1/return", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "NotBorrowedError");

    let (status, body) = send(&app, "POST", "/books/99/borrow", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "NotFoundError");
}

#[tokio::test]
async fn test_borrow_limit() {
    let app = app().await;

    for n in 1..=11 {
        let isbn = format!("978-{:010}", n);
        let (status, _) = send(&app, "POST", "/books", Some(book(&format!("Book {}", n), &isbn))).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    for id in 1..=10 {
        let (status, _) = send(&app, "POST", &format!("/books/{}/borrow", id), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "POST", "/books/11/borrow", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "CapacityExceededError");

    let (status, body) = send(&app, "GET", "/books/borrowed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["borrowed"], 10);
    assert_eq!(body["data"]["capacity"], 10);
    assert_eq!(body["data"]["books"].as_array().map(Vec::len), Some(10));

    let (_, body) = send(&app, "GET", "/books/11", None).await;
    assert_eq!(body["data"]["book"]["is_available"], true);
}

#[tokio::test]
async fn test_search_books() {
    let app = app().await;
    send(&app, "POST", "/books", Some(book("Dune", "978-0000000001"))).await;
    send(&app, "POST", "/books", Some(book("children of dune", "978-0000000002"))).await;
    send(&app, "POST", "/books", Some(book("Emma", "978-0000000003"))).await;

    let (status, body) = send(&app, "GET", "/books/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "InvalidQueryError");

    let (status, _) = send(&app, "GET", "/books/search?q=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/books/search?q=a", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/books/search?q=zz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);

    let (status, body) = send(&app, "GET", "/books/search?q=DUNE", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["books"][0]["title"], "Dune");
    assert_eq!(body["data"]["books"][1]["title"], "Children Of Dune");
}

#[tokio::test]
async fn test_update_book() {
    let app = app().await;
    send(&app, "POST", "/books", Some(book("Dune", "978-0000000001"))).await;
    send(&app, "POST", "/books/1/borrow", None).await;

    let (status, body) = send(&app, "PUT", "/books/1", Some(book("dune messiah", "978-0000000009"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book"]["title"], "Dune Messiah");
    assert_eq!(body["data"]["book"]["is_available"], false);

    let (status, _) = send(&app, "PUT", "/books/7", Some(book("Nothing", "978-0000000007"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_products() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["products"].as_array().map(Vec::len), Some(2));

    let (_, body) = send(&app, "GET", "/products?min_price=100", None).await;
    assert_eq!(body["data"]["products"][0]["name"], "Gaming Laptop");

    let (_, body) = send(&app, "GET", "/products?skip=1&limit=1", None).await;
    assert_eq!(body["data"]["products"][0]["id"], 2);

    let (status, _) = send(&app, "GET", "/products?limit=51", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_crud() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "USB Cable", "price": 5.5, "stock": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["product"]["id"], 3);

    let (status, _) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "usb cable", "price": 7.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "PUT", "/products/3", Some(json!({ "stock": 90 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["product"]["stock"], 90);
    assert_eq!(body["data"]["product"]["name"], "USB Cable");

    let (status, _) = send(&app, "GET", "/products/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "DELETE", "/products/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["product"]["name"], "USB Cable");

    let (status, _) = send(&app, "GET", "/products/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_products() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/products/search?name=mouse", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["products"][0]["name"], "Wireless Mouse");

    let (status, _) = send(&app, "GET", "/products/search?name=m", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/products/search?min_price=50&max_price=10", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_requests_use_error_envelope() {
    let app = app().await;

    // Missing required fields
    let (status, body) = send(&app, "POST", "/books", Some(json!({ "title": "Dune" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["type"], "InvalidFieldError");
    assert_eq!(body["error"]["status_code"], 422);

    let (status, body) = send(&app, "POST", "/books/abc/borrow", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["type"], "BadRequestError");

    let (status, body) = send(&app, "GET", "/products?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["type"], "BadRequestError");

    // Body that is not JSON at all
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["type"], "BadRequestError");
}
