// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness reports models_loaded; readiness returns 503 while degraded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Health check routes
//!
//! `/api/health` always answers 200 so orchestration does not restart a
//! degraded instance. `/api/ready` is the probe load balancers should use.

use crate::health::{HealthChecker, HealthResponse, ReadinessResponse};
use crate::resources::AdvisorResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use nutrilens_core::constants::endpoints;
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<AdvisorResources>) -> Router {
        Router::new()
            .route(endpoints::HEALTH, get(Self::health))
            .route(endpoints::READY, get(Self::ready))
            .with_state(resources)
    }

    async fn health(State(resources): State<Arc<AdvisorResources>>) -> Json<HealthResponse> {
        Json(HealthChecker::health(&resources))
    }

    async fn ready(
        State(resources): State<Arc<AdvisorResources>>,
    ) -> (StatusCode, Json<ReadinessResponse>) {
        let readiness = HealthChecker::readiness(&resources);
        let status = if readiness.is_ready() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(readiness))
    }
}
