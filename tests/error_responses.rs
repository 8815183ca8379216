use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::Service;

use api_errors::{ApiError, Detail, ErrorConfig};

// Helper to create test app: every route fails the way a real pipeline would.
fn create_test_app() -> Router {
    let config = ErrorConfig::default();

    Router::new()
        .route(
            "/cards/:id",
            get(|| async { Err::<(), ApiError>(ApiError::not_found(None)) }),
        )
        .route(
            "/cards",
            post(|| async {
                Err::<(), ApiError>(ApiError::method_not_allowed("POST", None))
            }),
        )
        .route(
            "/decks",
            post(move || async move {
                let detail = Detail::Map(vec![
                    (
                        "name".to_string(),
                        Detail::List(vec![Detail::from("This field is required.")]),
                    ),
                    (
                        "format".to_string(),
                        Detail::List(vec![Detail::from("Unknown format.")]),
                    ),
                ]);
                Err::<(), ApiError>(ApiError::validation(&config, detail, None))
            }),
        )
        .route(
            "/private",
            get(|| async { Err::<(), ApiError>(ApiError::not_authenticated(None)) }),
        )
        .route(
            "/search",
            get(|| async { Err::<(), ApiError>(ApiError::throttled(Some(30.0), None)) }),
        )
}

// Helper to send request and parse JSON response
async fn send_json_request(app: &mut Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

#[tokio::test]
async fn test_not_found_body_uses_detail_key() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "GET", "/cards/abc123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not found."}));
}

#[tokio::test]
async fn test_method_not_allowed_body_names_method() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "POST", "/cards").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"detail": "Method \"POST\" not allowed."}));
}

#[tokio::test]
async fn test_validation_body_keeps_field_mapping() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "POST", "/decks").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "detail": {
                "name": ["This field is required."],
                "format": ["Unknown format."],
            }
        })
    );
}

#[tokio::test]
async fn test_not_authenticated_body() {
    let mut app = create_test_app();
    let (status, body) = send_json_request(&mut app, "GET", "/private").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"detail": "Authentication credentials were not provided."})
    );
}

#[tokio::test]
async fn test_throttled_response_carries_wait() {
    let mut app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/search")
        .body(Body::empty())
        .unwrap();
    let response = app.call(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response
            .headers()
            .get("retry-after")
            .and_then(|value| value.to_str().ok()),
        Some("30")
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        json!({"detail": "Request was throttled. Expected available in 30 seconds."})
    );
}
