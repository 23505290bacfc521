//! Tests for CORS, static file serving, and `/status`.

mod helpers;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::{json, Value};

use helpers::{spawn_app, static_dir, test_config, PRODUCT_PAGE};

const ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[tokio::test]
async fn test_cors_allowed_origin_is_echoed() {
    let dir = static_dir();
    let base = spawn_app(test_config(dir.path())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/scrape-product", base))
        .header("origin", ALLOWED_ORIGIN)
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
}

#[tokio::test]
async fn test_cors_disallowed_origin_is_not_echoed() {
    let dir = static_dir();
    let base = spawn_app(test_config(dir.path())).await;

    let response = reqwest::Client::new()
        .post(format!("{}/scrape-product", base))
        .header("origin", "https://evil.example")
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_cors_preflight() {
    let dir = static_dir();
    let base = spawn_app(test_config(dir.path())).await;
    let client = reqwest::Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/scrape-product", base),
        )
        .header("origin", ALLOWED_ORIGIN)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
    let methods = headers
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(methods.contains("POST"));

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/scrape-product", base),
        )
        .header("origin", "https://evil.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_static_asset_is_served() {
    let dir = static_dir();
    let base = spawn_app(test_config(dir.path())).await;

    let response = reqwest::get(format!("{}/assets/app.js", base)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "console.log('app');");
}

#[tokio::test]
async fn test_unknown_route_serves_index() {
    let dir = static_dir();
    let base = spawn_app(test_config(dir.path())).await;

    for path in ["/", "/import/history", "/does-not-exist.txt"] {
        let response = reqwest::get(format!("{}{}", base, path)).await.unwrap();
        assert_eq!(response.status(), 200, "path {}", path);
        assert!(
            response.text().await.unwrap().contains("importer"),
            "path {} should serve index.html",
            path
        );
    }
}

#[tokio::test]
async fn test_status_counts_outcomes() {
    let upstream = Server::run();
    upstream.expect(
        Expectation::matching(request::method_path("GET", "/dp/ok"))
            .respond_with(status_code(200).body(PRODUCT_PAGE)),
    );
    upstream.expect(
        Expectation::matching(request::method_path("GET", "/dp/missing"))
            .respond_with(status_code(404)),
    );
    let dir = static_dir();
    let base = spawn_app(test_config(dir.path())).await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "url": upstream.url("/dp/ok").to_string() }),
        json!({ "url": upstream.url("/dp/missing").to_string() }),
        json!({}),
    ] {
        client
            .post(format!("{}/scrape-product", base))
            .json(&body)
            .send()
            .await
            .unwrap();
    }

    let status: Value = reqwest::get(format!("{}/status", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(status["total_requests"], 3);
    assert_eq!(status["succeeded"], 1);
    assert_eq!(status["validation_failures"], 1);
    assert_eq!(status["scrape_failures"], 1);
    assert_eq!(status["errors"]["http_request_not_found"], 1);
    assert_eq!(status["errors"]["http_request_connect_error"], 0);
    assert!(status["uptime_seconds"].as_f64().unwrap() >= 0.0);
}
