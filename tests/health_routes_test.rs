// ABOUTME: HTTP integration tests for liveness and readiness routes
// ABOUTME: Covers healthy and degraded engines and the probe status codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{router_with, test_resources, test_router};
use helpers::axum_test::AxumTestRequest;
use nutrilens::resources::AdvisorResources;
use nutrilens::routes::HealthRoutes;
use serde_json::{json, Value};
use std::sync::Arc;

// ============================================================================
// GET /api/health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/api/health")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({"status": "healthy", "models_loaded": true}));
}

#[tokio::test]
async fn test_health_endpoint_stays_up_when_degraded() {
    let app = router_with(Arc::new(AdvisorResources::degraded(3)));

    let response = AxumTestRequest::get("/api/health").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["models_loaded"], false);
}

#[tokio::test]
async fn test_health_routes_work_without_middleware() {
    let routes = HealthRoutes::routes(test_resources());

    let response = AxumTestRequest::get("/api/health").send(routes).await;

    assert_eq!(response.status(), 200);
}

// ============================================================================
// GET /api/ready
// ============================================================================

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/api/ready")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["models_loaded"], true);
    assert!(body["knowledge_facts"].as_u64().unwrap() > 0);

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_degraded_is_unavailable() {
    let app = router_with(Arc::new(AdvisorResources::degraded(3)));

    let response = AxumTestRequest::get("/api/ready").send(app).await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["models_loaded"], false);
    assert_eq!(body["knowledge_facts"], 0);
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_by_default() {
    let response = AxumTestRequest::options("/api/nutrition/simplify")
        .header("origin", "https://labels.example.com")
        .header("access-control-request-method", "POST")
        .send(test_router())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
