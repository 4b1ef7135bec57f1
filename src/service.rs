// ABOUTME: Advisory operations combining retrieval, text generation, and scoring
// ABOUTME: Shared by the HTTP routes and the offline CLI so both produce identical responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Advisory service
//!
//! Each operation follows the same pipeline: build a retrieval query from a
//! fixed template, fetch matching facts, render the prompt, generate the
//! narrative, then attach the scoring results. Operations never mutate shared
//! state and are safe to run concurrently.

use crate::llm::prompts;
use crate::logging::AdvisoryLogger;
use crate::resources::AdvisorResources;
use nutrilens_core::constants::advisory::CHAT_RELEVANT_FACTS;
use nutrilens_core::errors::{AppError, AppResult};
use nutrilens_core::models::{format_amount, Nutrient, NutritionRecord};
use nutrilens_intelligence::{
    is_compatible, recommendation, DietType, GuidelineProfile, GuidelineTable, HealthGoal,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Follow-up prompts offered after every chat answer
pub const FOLLOW_UP_SUGGESTIONS: [&str; 3] = [
    "How does this compare to daily recommended values?",
    "What are the health implications of these nutrients?",
    "Are there any concerns with this food item?",
];

/// Health-goal request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthGoalRequest {
    /// Label to evaluate
    pub nutrition_data: NutritionRecord,
    /// Goal id (`weight_loss`, `muscle_gain`, ...)
    pub health_goal: String,
}

/// Diet-compatibility request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietCompatibilityRequest {
    /// Label to evaluate
    pub nutrition_data: NutritionRecord,
    /// Diet id (`keto`, `vegan`, ...)
    pub diet_type: String,
}

/// Chat request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Label the question is about
    pub nutrition_data: NutritionRecord,
    /// Free-form question
    pub question: String,
    /// Optional caller context
    #[serde(default)]
    pub context: Option<String>,
}

/// Simplified label explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifyResponse {
    /// Narrative explanation
    pub simplified_explanation: String,
    /// Percent of daily value per label-tracked nutrient
    pub daily_value_percentages: BTreeMap<Nutrient, f64>,
    /// Four headline facts about the serving
    pub key_insights: Vec<String>,
}

/// Health-goal verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthGoalResponse {
    /// Goal id echoed back
    pub health_goal: String,
    /// Narrative verdict
    pub suitability_verdict: String,
    /// 0-100 suitability
    pub suitability_score: u8,
    /// Tiered recommendation text
    pub recommendation: String,
    /// Goal descriptor, `{}` for unknown goals
    pub goal_info: GuidelineProfile,
}

/// Diet-compatibility verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietCompatibilityResponse {
    /// Diet id echoed back
    pub diet_type: String,
    /// Narrative explanation
    pub compatibility_explanation: String,
    /// 0-100 compatibility
    pub compatibility_score: u8,
    /// Score at or above the compatibility threshold
    pub is_compatible: bool,
    /// Diet descriptor, `{}` for unknown diets
    pub diet_info: GuidelineProfile,
    /// Diet-specific problems with the label
    pub specific_concerns: Vec<String>,
}

/// Chat answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Question echoed back
    pub question: String,
    /// Narrative answer
    pub answer: String,
    /// Up to two supporting facts
    pub relevant_facts: Vec<String>,
    /// Suggested next questions
    pub follow_up_suggestions: Vec<String>,
}

/// Warnings and suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningsResponse {
    /// Narrative analysis
    pub ai_analysis: String,
    /// Threshold warnings
    pub health_warnings: Vec<String>,
    /// Healthier swaps
    pub alternative_suggestions: Vec<String>,
    /// 0-100 overall score
    pub overall_health_score: u8,
    /// Meal improvement tips
    pub improvement_tips: Vec<String>,
}

/// The five advisory operations over shared resources
#[derive(Debug, Clone)]
pub struct AdvisoryService {
    resources: Arc<AdvisorResources>,
}

impl AdvisoryService {
    /// Create a service over shared resources
    #[must_use]
    pub const fn new(resources: Arc<AdvisorResources>) -> Self {
        Self { resources }
    }

    /// Shared resources
    #[must_use]
    pub fn resources(&self) -> &AdvisorResources {
        &self.resources
    }

    fn retrieve(&self, query: &str) -> Vec<String> {
        let top_k = self.resources.top_k();
        let facts = self.resources.knowledge().retrieve(query, top_k);
        AdvisoryLogger::log_retrieval(query, top_k, facts.len());
        facts
    }

    async fn generate(&self, prompt: &str, failure: &str) -> AppResult<String> {
        self.resources
            .generator()
            .generate(prompt)
            .await
            .map_err(|e| AppError::internal(format!("{failure}: {}", e.message)))
    }

    /// Explain a label in plain language with daily-value percentages
    ///
    /// # Errors
    ///
    /// Returns an internal error if text generation fails
    pub async fn simplify(&self, record: &NutritionRecord) -> AppResult<SimplifyResponse> {
        let started = Instant::now();
        let query = format!(
            "explain nutrition label with {} calories",
            format_amount(record.calories)
        );
        let facts = self.retrieve(&query);
        let prompt = prompts::simplify_prompt(record, &facts);
        let explanation = self
            .generate(&prompt, "Error processing nutrition label")
            .await?;

        let response = SimplifyResponse {
            simplified_explanation: explanation,
            daily_value_percentages: self.resources.scoring().daily_value_percentages(record),
            key_insights: key_insights(record),
        };
        log_served("simplify", record, facts.len(), started);
        Ok(response)
    }

    /// Score a label against a health goal
    ///
    /// Unknown goals score the base value and carry an empty descriptor.
    ///
    /// # Errors
    ///
    /// Returns an internal error if text generation fails
    pub async fn health_goal(&self, request: &HealthGoalRequest) -> AppResult<HealthGoalResponse> {
        let started = Instant::now();
        let record = &request.nutrition_data;
        let goal = request.health_goal.as_str();

        let facts = self.retrieve(&format!("health goal {goal} nutrition suitability"));
        let goal_info = self
            .resources
            .guidelines()
            .health_goal(goal)
            .cloned()
            .unwrap_or_default();
        let prompt = prompts::health_goal_prompt(record, goal, &goal_info.description, &facts);
        let verdict = self
            .generate(&prompt, "Error analyzing health goal suitability")
            .await?;

        let score = self
            .resources
            .scoring()
            .health_goal_score(record, HealthGoal::from_id(goal));
        let response = HealthGoalResponse {
            health_goal: request.health_goal.clone(),
            suitability_verdict: verdict,
            suitability_score: score,
            recommendation: recommendation(score).to_owned(),
            goal_info,
        };
        log_served("health_goal", record, facts.len(), started);
        Ok(response)
    }

    /// Check a label against a diet
    ///
    /// Unknown diets score the base value and carry an empty descriptor.
    ///
    /// # Errors
    ///
    /// Returns an internal error if text generation fails
    pub async fn diet_compatibility(
        &self,
        request: &DietCompatibilityRequest,
    ) -> AppResult<DietCompatibilityResponse> {
        let started = Instant::now();
        let record = &request.nutrition_data;
        let diet_id = request.diet_type.as_str();

        let facts = self.retrieve(&format!("diet compatibility {diet_id} nutrition"));
        let diet_info = self
            .resources
            .guidelines()
            .diet_profile(diet_id)
            .cloned()
            .unwrap_or_default();
        let prompt = prompts::diet_prompt(record, diet_id, &diet_info.description, &facts);
        let explanation = self
            .generate(&prompt, "Error checking diet compatibility")
            .await?;

        let diet = DietType::from_id(diet_id);
        let scoring = self.resources.scoring();
        let score = scoring.diet_compatibility_score(record, diet);
        let response = DietCompatibilityResponse {
            diet_type: request.diet_type.clone(),
            compatibility_explanation: explanation,
            compatibility_score: score,
            is_compatible: is_compatible(score),
            diet_info,
            specific_concerns: scoring.diet_specific_concerns(record, diet),
        };
        log_served("diet_compatibility", record, facts.len(), started);
        Ok(response)
    }

    /// Answer a free-form question about a label
    ///
    /// # Errors
    ///
    /// Returns an internal error if text generation fails
    pub async fn chat(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        let started = Instant::now();
        let record = &request.nutrition_data;

        let mut facts = self.retrieve(&request.question);
        let prompt = prompts::chat_prompt(
            record,
            &request.question,
            request.context.as_deref().unwrap_or_default(),
            &facts,
        );
        let answer = self
            .generate(&prompt, "Error in conversational assistant")
            .await?;

        log_served("chat", record, facts.len(), started);
        facts.truncate(CHAT_RELEVANT_FACTS);
        Ok(ChatResponse {
            question: request.question.clone(),
            answer,
            relevant_facts: facts,
            follow_up_suggestions: FOLLOW_UP_SUGGESTIONS
                .iter()
                .map(|suggestion| (*suggestion).to_owned())
                .collect(),
        })
    }

    /// Threshold warnings, swaps, tips, and an overall score for a label
    ///
    /// # Errors
    ///
    /// Returns an internal error if text generation fails
    pub async fn warnings(&self, record: &NutritionRecord) -> AppResult<WarningsResponse> {
        let started = Instant::now();
        let query = format!("nutrition warnings health alerts {}", record.food_name);
        let facts = self.retrieve(&query);
        let prompt = prompts::warnings_prompt(record, &facts);
        let analysis = self.generate(&prompt, "Error generating warnings").await?;

        let scoring = self.resources.scoring();
        let response = WarningsResponse {
            ai_analysis: analysis,
            health_warnings: scoring.health_warnings(record),
            alternative_suggestions: scoring.healthy_alternatives(record),
            overall_health_score: scoring.overall_health_score(record),
            improvement_tips: scoring.improvement_tips(record),
        };
        log_served("warnings", record, facts.len(), started);
        Ok(response)
    }

    /// Active guideline table
    #[must_use]
    pub fn guidelines(&self) -> &GuidelineTable {
        self.resources.guidelines()
    }
}

fn key_insights(record: &NutritionRecord) -> Vec<String> {
    vec![
        format!(
            "This serving contains {} calories",
            format_amount(record.calories)
        ),
        format!("Provides {}g of protein", format_amount(record.protein)),
        format!("Contains {}g of fat", format_amount(record.total_fat)),
        format!(
            "Has {}g of added sugars",
            format_amount(record.added_sugars)
        ),
    ]
}

fn log_served(operation: &str, record: &NutritionRecord, facts_used: usize, started: Instant) {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AdvisoryLogger::log_advisory(operation, &record.food_name, facts_used, duration_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::llm::TextGenerator;
    use nutrilens_core::errors::ErrorCode;

    fn service() -> AdvisoryService {
        AdvisoryService::new(Arc::new(AdvisorResources::default()))
    }

    fn yogurt() -> NutritionRecord {
        NutritionRecord {
            calories: 150.0,
            total_fat: 8.0,
            saturated_fat: 5.0,
            cholesterol: 20.0,
            sodium: 100.0,
            total_carbs: 10.0,
            total_sugars: 10.0,
            added_sugars: 8.0,
            protein: 15.0,
            food_name: "Greek Yogurt".to_owned(),
            ..NutritionRecord::default()
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Err(AppError::internal("generator offline"))
        }
    }

    #[tokio::test]
    async fn test_simplify_uses_calorie_explanation() {
        let response = service().simplify(&yogurt()).await.unwrap();
        assert!(response
            .simplified_explanation
            .starts_with("This nutrition label shows the caloric content"));
        assert_eq!(
            response.key_insights,
            vec![
                "This serving contains 150.0 calories",
                "Provides 15.0g of protein",
                "Contains 8.0g of fat",
                "Has 8.0g of added sugars",
            ]
        );
        assert!((response.daily_value_percentages[&Nutrient::Sodium] - 4.3).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_unknown_diet_degrades_to_base_score() {
        let request = DietCompatibilityRequest {
            nutrition_data: yogurt(),
            diet_type: "carnivore".to_owned(),
        };
        let response = service().diet_compatibility(&request).await.unwrap();
        assert_eq!(response.compatibility_score, 50);
        assert!(!response.is_compatible);
        assert!(response.diet_info.is_empty());
        assert!(response.specific_concerns.is_empty());
    }

    #[tokio::test]
    async fn test_health_goal_carries_descriptor() {
        let request = HealthGoalRequest {
            nutrition_data: yogurt(),
            health_goal: "weight_loss".to_owned(),
        };
        let response = service().health_goal(&request).await.unwrap();
        assert_eq!(response.suitability_score, 85);
        assert_eq!(response.recommendation, "Excellent choice for your health goal!");
        assert_eq!(
            response.goal_info.description,
            "Focus on low-calorie, high-fiber foods with moderate protein"
        );
    }

    #[tokio::test]
    async fn test_chat_limits_relevant_facts() {
        let request = ChatRequest {
            nutrition_data: yogurt(),
            question: "How much sodium and protein is in this?".to_owned(),
            context: None,
        };
        let response = service().chat(&request).await.unwrap();
        assert_eq!(response.relevant_facts.len(), 2);
        assert_eq!(response.follow_up_suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_generator_failure_maps_to_internal_error() {
        let resources = AdvisorResources::default().with_generator(Arc::new(FailingGenerator));
        let service = AdvisoryService::new(Arc::new(resources));

        let err = service.warnings(&yogurt()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "Error generating warnings: generator offline");
    }
}
