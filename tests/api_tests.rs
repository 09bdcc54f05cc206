//! Router-level tests that need no live database
//!
//! The pool is created lazily, so every request here must be settled before
//! any query is attempted: client-side validation failures, missing bearer
//! tokens, and the upload size guard.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use soliq_server::auth::AuthService;
use soliq_server::routes::build_router;
use soliq_server::state::AppState;

/// Build the app against a lazy pool that never connects
fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgresql://localhost/soliq_never_connected")
        .expect("valid database URL");

    let auth_service = Arc::new(AuthService::new(
        pool.clone(),
        "test-secret".to_string(),
        900,
        7,
    ));

    build_router(AppState::new(pool, auth_service))
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ============================================================================
// Registration validation
// ============================================================================

#[tokio::test]
async fn register_with_empty_body_returns_400() {
    let response = test_app()
        .oneshot(json_request("/register", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_with_only_username_returns_400() {
    let response = test_app()
        .oneshot(json_request("/register", r#"{"user": "tomas"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_with_only_password_returns_400() {
    let response = test_app()
        .oneshot(json_request("/register", r#"{"pwd": "tomas"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_with_empty_fields_returns_400() {
    let response = test_app()
        .oneshot(json_request("/register", r#"{"user": "", "pwd": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_missing_fields_returns_400() {
    let response = test_app()
        .oneshot(json_request("/auth", r#"{"user": "jhondoe"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Token gate: protected reads are never served without an access token
// ============================================================================

async fn assert_requires_token(uri: &str) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
}

#[tokio::test]
async fn protected_reads_require_token() {
    assert_requires_token("/areas").await;
    assert_requires_token("/tipos-solicitud").await;
    assert_requires_token("/estados-solicitud").await;
    assert_requires_token("/metadata").await;
    assert_requires_token("/users").await;
    assert_requires_token("/auth/me").await;
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/areas")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_queja_requires_token() {
    let response = test_app()
        .oneshot(json_request(
            "/quejas/",
            r#"{"descripcion": "sin token"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Upload size guard
// ============================================================================

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn multipart_upload_request(file_bytes: usize) -> Request<Body> {
    let mut body = Vec::new();

    for (name, value) in [("nombre", "Una queja"), ("edad", "30")] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"adjunto.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(&vec![0u8; file_bytes]);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_at_size_limit_is_accepted() {
    let response = test_app()
        .oneshot(multipart_upload_request(102_400))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn upload_one_byte_over_limit_returns_413() {
    let response = test_app()
        .oneshot(multipart_upload_request(102_401))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn upload_without_file_returns_400() {
    let mut body = Vec::new();
    for (name, value) in [("nombre", "Una queja"), ("edad", "30")] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/upload/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Unauthenticated surface
// ============================================================================

#[tokio::test]
async fn root_is_public() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get("x-content-type-options").unwrap(),
        &"nosniff"
    );
    assert_eq!(headers.get("x-frame-options").unwrap(), &"DENY");
    assert!(headers.contains_key("referrer-policy"));
    assert!(headers.contains_key("content-security-policy"));
}
