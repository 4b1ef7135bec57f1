// ABOUTME: Nutrition advisory route handlers
// ABOUTME: Simplify, health-goal, diet-compatibility, chat, warnings, and guideline table endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Nutrition advisory routes

use super::ValidatedJson;
use crate::resources::AdvisorResources;
use crate::service::{
    AdvisoryService, ChatRequest, ChatResponse, DietCompatibilityRequest,
    DietCompatibilityResponse, HealthGoalRequest, HealthGoalResponse, SimplifyResponse,
    WarningsResponse,
};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use nutrilens_core::constants::endpoints;
use nutrilens_core::errors::AppError;
use nutrilens_core::models::NutritionRecord;
use nutrilens_intelligence::GuidelineTable;
use std::sync::Arc;

/// Nutrition advisory routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all advisory routes
    pub fn routes(resources: Arc<AdvisorResources>) -> Router {
        Router::new()
            .route(endpoints::SIMPLIFY, post(Self::simplify))
            .route(endpoints::HEALTH_GOAL, post(Self::health_goal))
            .route(endpoints::DIET_COMPATIBILITY, post(Self::diet_compatibility))
            .route(endpoints::CHAT, post(Self::chat))
            .route(endpoints::WARNINGS, post(Self::warnings))
            .route(endpoints::GUIDELINES, get(Self::guidelines))
            .with_state(resources)
    }

    async fn simplify(
        State(resources): State<Arc<AdvisorResources>>,
        ValidatedJson(record): ValidatedJson<NutritionRecord>,
    ) -> Result<Json<SimplifyResponse>, AppError> {
        let response = AdvisoryService::new(resources).simplify(&record).await?;
        Ok(Json(response))
    }

    async fn health_goal(
        State(resources): State<Arc<AdvisorResources>>,
        ValidatedJson(request): ValidatedJson<HealthGoalRequest>,
    ) -> Result<Json<HealthGoalResponse>, AppError> {
        let response = AdvisoryService::new(resources).health_goal(&request).await?;
        Ok(Json(response))
    }

    async fn diet_compatibility(
        State(resources): State<Arc<AdvisorResources>>,
        ValidatedJson(request): ValidatedJson<DietCompatibilityRequest>,
    ) -> Result<Json<DietCompatibilityResponse>, AppError> {
        let response = AdvisoryService::new(resources)
            .diet_compatibility(&request)
            .await?;
        Ok(Json(response))
    }

    async fn chat(
        State(resources): State<Arc<AdvisorResources>>,
        ValidatedJson(request): ValidatedJson<ChatRequest>,
    ) -> Result<Json<ChatResponse>, AppError> {
        let response = AdvisoryService::new(resources).chat(&request).await?;
        Ok(Json(response))
    }

    async fn warnings(
        State(resources): State<Arc<AdvisorResources>>,
        ValidatedJson(record): ValidatedJson<NutritionRecord>,
    ) -> Result<Json<WarningsResponse>, AppError> {
        let response = AdvisoryService::new(resources).warnings(&record).await?;
        Ok(Json(response))
    }

    async fn guidelines(State(resources): State<Arc<AdvisorResources>>) -> Json<GuidelineTable> {
        Json(resources.guidelines().clone())
    }
}
