// ABOUTME: Advisory commands for nutrilens-cli
// ABOUTME: Builds service requests from CLI arguments and returns the response as JSON values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use anyhow::Result;
use nutrilens::service::{AdvisoryService, ChatRequest, DietCompatibilityRequest, HealthGoalRequest};
use nutrilens_core::models::NutritionRecord;
use serde_json::Value;
use tracing::info;

/// Simplify the label
pub async fn simplify(service: &AdvisoryService, record: NutritionRecord) -> Result<Value> {
    info!(food = %record.food_name, "Simplifying label");
    let response = service.simplify(&record).await?;
    Ok(serde_json::to_value(response)?)
}

/// Score against a health goal
pub async fn health_goal(
    service: &AdvisoryService,
    nutrition_data: NutritionRecord,
    health_goal: String,
) -> Result<Value> {
    info!(goal = %health_goal, "Scoring health goal suitability");
    let request = HealthGoalRequest {
        nutrition_data,
        health_goal,
    };
    let response = service.health_goal(&request).await?;
    Ok(serde_json::to_value(response)?)
}

/// Check diet compatibility
pub async fn diet(
    service: &AdvisoryService,
    nutrition_data: NutritionRecord,
    diet_type: String,
) -> Result<Value> {
    info!(diet = %diet_type, "Checking diet compatibility");
    let request = DietCompatibilityRequest {
        nutrition_data,
        diet_type,
    };
    let response = service.diet_compatibility(&request).await?;
    Ok(serde_json::to_value(response)?)
}

/// Answer a question
pub async fn ask(
    service: &AdvisoryService,
    nutrition_data: NutritionRecord,
    question: String,
    context: Option<String>,
) -> Result<Value> {
    let request = ChatRequest {
        nutrition_data,
        question,
        context,
    };
    let response = service.chat(&request).await?;
    Ok(serde_json::to_value(response)?)
}

/// Generate warnings and suggestions
pub async fn warnings(service: &AdvisoryService, record: NutritionRecord) -> Result<Value> {
    info!(food = %record.food_name, "Generating warnings");
    let response = service.warnings(&record).await?;
    Ok(serde_json::to_value(response)?)
}
