//! HTTP surface driven in-process, without a listening socket. None of these
//! requests reaches the analysis backend.

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use serde_json::{json, Value};
use sitelens::{router, AppState, Config};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    let config = Config::new("http://127.0.0.1:9", "127.0.0.1:0").unwrap();
    router(Arc::new(AppState::new(config)))
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "http://127.0.0.1:9/api");
}

#[tokio::test]
async fn unknown_workflow_is_not_found() {
    let (status, body) = send(app(), get("/api/workflows/seo-audit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Unknown workflow: seo-audit");
}

#[tokio::test]
async fn fresh_workflow_is_idle() {
    let (status, body) = send(app(), get("/api/workflows/assessment")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workflow"], "assessment");
    assert_eq!(body["state"]["status"], "idle");
}

#[tokio::test]
async fn blank_url_is_rejected_and_recorded() {
    let app = app();
    let (status, body) = send(
        app.clone(),
        post_json("/api/workflows/speed-check", json!({ "url": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Please enter a website URL");

    let (_, body) = send(app, get("/api/workflows/speed-check")).await;
    assert_eq!(body["state"]["status"], "error");
    assert_eq!(body["state"]["data"], "Please enter a website URL");
}

#[tokio::test]
async fn comparison_needs_both_urls() {
    let (status, body) = send(
        app(),
        post_json("/api/workflows/comparison", json!({ "url_a": "example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Please enter both website URLs");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/views/heatmap")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn heatmap_view_honours_tier_filter() {
    let payload = json!({
        "screenshot_base64": "iVBORw0",
        "analysis": {
            "high_attention_zones": [
                {"x_percent": 0, "y_percent": 0, "width_percent": 10, "height_percent": 5, "attention_score": 9}
            ],
            "low_attention_zones": [
                {"x_percent": 20, "y_percent": 80, "width_percent": 30, "height_percent": 10, "attention_score": 2}
            ]
        }
    });

    let (status, body) = send(app(), post_json("/api/views/heatmap?tier=low", payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workflow"], "heatmap");
    let overlays = body["overlays"].as_array().unwrap();
    assert_eq!(overlays.len(), 1);
    assert_eq!(overlays[0]["tier"], "low");
    assert_eq!(body["screenshot_uri"], "data:image/jpeg;base64,iVBORw0");

    let (_, body) = send(app(), post_json("/api/views/heatmap", payload)).await;
    assert_eq!(body["overlays"].as_array().unwrap().len(), 2);
    assert_eq!(body["overlays"][0]["persistent_badge_visible"], true);
}

#[tokio::test]
async fn comparison_view_computes_totals() {
    let payload = json!({
        "comparison": {
            "scores": {
                "site_a": {"value_proposition": 9, "cta_strength": 6, "trust_signals": 7},
                "site_b": {"value_proposition": 5, "cta_strength": 8, "trust_signals": 7}
            },
            "summary": {"overall_winner": "Site B"}
        }
    });
    let (status, body) = send(app(), post_json("/api/views/comparison", payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["total_a"], 22.0);
    assert_eq!(body["result"]["total_b"], 20.0);
    assert_eq!(body["result"]["overall_winner"], "entity_a");
    assert_eq!(body["declared_winner_agrees"], false);
}

#[tokio::test]
async fn wrong_payload_shape_is_bad_request() {
    let (status, body) = send(
        app(),
        post_json("/api/views/speed-check", json!({"scan_data": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid speed-check payload"));
}
