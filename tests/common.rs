// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample labels, and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutrilens`

use axum::Router;
use nutrilens::config::ServerConfig;
use nutrilens::resources::AdvisorResources;
use nutrilens::server::build_router;
use serde_json::{json, Value};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fully initialised resources over the built-in guideline table
pub fn test_resources() -> Arc<AdvisorResources> {
    init_test_logging();
    Arc::new(AdvisorResources::default())
}

/// Complete application router over `resources` with default configuration
pub fn router_with(resources: Arc<AdvisorResources>) -> Router {
    build_router(resources, &ServerConfig::default())
}

/// Complete application router over the built-in guideline table
pub fn test_router() -> Router {
    router_with(test_resources())
}

/// A plain Greek yogurt label
pub fn greek_yogurt() -> Value {
    json!({
        "calories": 150,
        "total_fat": 8,
        "saturated_fat": 5,
        "trans_fat": 0,
        "cholesterol": 20,
        "sodium": 100,
        "total_carbs": 10,
        "dietary_fiber": 0,
        "total_sugars": 10,
        "added_sugars": 8,
        "protein": 15,
        "serving_size": "1 cup",
        "food_name": "Greek Yogurt"
    })
}

/// A salty, sugary snack that trips most warning thresholds
pub fn snack_cake() -> Value {
    json!({
        "calories": 420,
        "total_fat": 22,
        "saturated_fat": 9,
        "trans_fat": 0.5,
        "cholesterol": 45,
        "sodium": 1200,
        "total_carbs": 52,
        "dietary_fiber": 1,
        "total_sugars": 34,
        "added_sugars": 30,
        "protein": 4,
        "food_name": "Snack Cake"
    })
}

/// Health-goal request body
pub fn goal_request(health_goal: &str) -> Value {
    json!({
        "nutrition_data": greek_yogurt(),
        "health_goal": health_goal,
    })
}

/// Diet-compatibility request body
pub fn diet_request(nutrition_data: Value, diet_type: &str) -> Value {
    json!({
        "nutrition_data": nutrition_data,
        "diet_type": diet_type,
    })
}
