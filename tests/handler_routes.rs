//! Tests against the fully assembled router: nesting, path normalization and
//! rate limiting keyed by forwarded client address.

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use compound_interest::api::middleware::rate_limit::RateLimitSettings;
use compound_interest::routes::app_router;
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

type AppService = NormalizePath<axum::Router>;

fn proxied_app(burst: u32) -> AppService {
    app_router(
        common::create_test_state(),
        RateLimitSettings {
            period_seconds: 60,
            burst,
            behind_proxy: true,
        },
    )
    .unwrap()
}

fn calculate_request(uri: &str, client_ip: &str) -> Request<Body> {
    let body = json!({
        "principal": "1000000",
        "rate": "10",
        "years": "1"
    });

    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", client_ip)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str, client_ip: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-forwarded-for", client_ip)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &AppService, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_calculate_through_api_nest() {
    let app = proxied_app(10);

    let response = send(&app, calculate_request("/api/calculate", "203.0.113.1")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["message"], "El interés ganado será: $ 100.000,00 COP");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = proxied_app(10);

    let response = send(&app, calculate_request("/api/calculate/", "203.0.113.2")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get_request("/health/", "203.0.113.2")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_by_forwarded_address() {
    let app = proxied_app(1);

    let first = send(&app, calculate_request("/api/calculate", "203.0.113.10")).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = send(&app, calculate_request("/api/calculate", "203.0.113.10")).await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

    // Separate bucket per client
    let other = send(&app, calculate_request("/api/calculate", "203.0.113.11")).await;
    assert_eq!(other.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let app = proxied_app(1);

    for _ in 0..3 {
        let response = send(&app, get_request("/health", "203.0.113.20")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_unknown_route_under_api() {
    let app = proxied_app(10);

    let response = send(&app, get_request("/api/unknown", "203.0.113.30")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_unknown_top_level_route() {
    let app = proxied_app(10);

    let response = send(&app, get_request("/calculate", "203.0.113.31")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "not_found");
}
