// ABOUTME: Prompt templates for the five advisory operations
// ABOUTME: Render label fields, caller text, and retrieved knowledge into generator input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Prompt templates
//!
//! The rule-based generator inspects only the keywords in these prompts, so the
//! fixed wording matters: "Simplify" and "Calories" select the calorie
//! explanation, "health goal" selects the goal narratives, and so on.

use nutrilens_core::models::{format_amount, NutritionRecord};

fn join_context(facts: &[String]) -> String {
    facts.join(" ")
}

/// Prompt for label simplification
#[must_use]
pub fn simplify_prompt(record: &NutritionRecord, facts: &[String]) -> String {
    format!(
        "Simplify this nutrition label for easy understanding:\n\
         \n\
         Food: {food}\n\
         Serving Size: {serving}\n\
         Calories: {calories}\n\
         Total Fat: {fat}g\n\
         Saturated Fat: {sat_fat}g\n\
         Cholesterol: {cholesterol}mg\n\
         Sodium: {sodium}mg\n\
         Total Carbohydrates: {carbs}g\n\
         Dietary Fiber: {fiber}g\n\
         Total Sugars: {sugars}g\n\
         Added Sugars: {added}g\n\
         Protein: {protein}g\n\
         \n\
         Context: {context}\n\
         \n\
         Provide a simple, friendly explanation of what these numbers mean:",
        food = record.food_name,
        serving = record.serving_size,
        calories = format_amount(record.calories),
        fat = format_amount(record.total_fat),
        sat_fat = format_amount(record.saturated_fat),
        cholesterol = format_amount(record.cholesterol),
        sodium = format_amount(record.sodium),
        carbs = format_amount(record.total_carbs),
        fiber = format_amount(record.dietary_fiber),
        sugars = format_amount(record.total_sugars),
        added = format_amount(record.added_sugars),
        protein = format_amount(record.protein),
        context = join_context(facts),
    )
}

/// Prompt for health-goal suitability
#[must_use]
pub fn health_goal_prompt(
    record: &NutritionRecord,
    goal: &str,
    goal_description: &str,
    facts: &[String],
) -> String {
    format!(
        "Analyze if this food is suitable for the health goal: {goal}\n\
         \n\
         Nutrition Information:\n\
         Calories: {calories}\n\
         Total Fat: {fat}g\n\
         Saturated Fat: {sat_fat}g\n\
         Sodium: {sodium}mg\n\
         Added Sugars: {added}g\n\
         Protein: {protein}g\n\
         Fiber: {fiber}g\n\
         \n\
         Health Goal: {goal}\n\
         Goal Description: {goal_description}\n\
         \n\
         Context: {context}\n\
         \n\
         Provide a clear verdict on whether this food aligns with the health goal:",
        calories = format_amount(record.calories),
        fat = format_amount(record.total_fat),
        sat_fat = format_amount(record.saturated_fat),
        sodium = format_amount(record.sodium),
        added = format_amount(record.added_sugars),
        protein = format_amount(record.protein),
        fiber = format_amount(record.dietary_fiber),
        context = join_context(facts),
    )
}

/// Prompt for diet compatibility
#[must_use]
pub fn diet_prompt(
    record: &NutritionRecord,
    diet: &str,
    diet_description: &str,
    facts: &[String],
) -> String {
    format!(
        "Check if this food is compatible with the {diet} diet:\n\
         \n\
         Nutrition Information:\n\
         Calories: {calories}\n\
         Total Fat: {fat}g\n\
         Total Carbs: {carbs}g\n\
         Dietary Fiber: {fiber}g\n\
         Protein: {protein}g\n\
         Sodium: {sodium}mg\n\
         Added Sugars: {added}g\n\
         \n\
         Diet Type: {diet}\n\
         Diet Description: {diet_description}\n\
         \n\
         Context: {context}\n\
         \n\
         Explain the compatibility with reasoning:",
        calories = format_amount(record.calories),
        fat = format_amount(record.total_fat),
        carbs = format_amount(record.total_carbs),
        fiber = format_amount(record.dietary_fiber),
        protein = format_amount(record.protein),
        sodium = format_amount(record.sodium),
        added = format_amount(record.added_sugars),
        context = join_context(facts),
    )
}

/// Prompt for a free-form question about a label
#[must_use]
pub fn chat_prompt(
    record: &NutritionRecord,
    question: &str,
    context: &str,
    facts: &[String],
) -> String {
    format!(
        "Answer this question about the nutrition information:\n\
         \n\
         Question: {question}\n\
         \n\
         Nutrition Information:\n\
         Food: {food}\n\
         Calories: {calories}\n\
         Total Fat: {fat}g\n\
         Saturated Fat: {sat_fat}g\n\
         Cholesterol: {cholesterol}mg\n\
         Sodium: {sodium}mg\n\
         Total Carbs: {carbs}g\n\
         Dietary Fiber: {fiber}g\n\
         Total Sugars: {sugars}g\n\
         Added Sugars: {added}g\n\
         Protein: {protein}g\n\
         \n\
         Context: {context}\n\
         Knowledge: {knowledge}\n\
         \n\
         Provide a helpful, conversational answer:",
        food = record.food_name,
        calories = format_amount(record.calories),
        fat = format_amount(record.total_fat),
        sat_fat = format_amount(record.saturated_fat),
        cholesterol = format_amount(record.cholesterol),
        sodium = format_amount(record.sodium),
        carbs = format_amount(record.total_carbs),
        fiber = format_amount(record.dietary_fiber),
        sugars = format_amount(record.total_sugars),
        added = format_amount(record.added_sugars),
        protein = format_amount(record.protein),
        knowledge = join_context(facts),
    )
}

/// Prompt for warnings and suggestions
#[must_use]
pub fn warnings_prompt(record: &NutritionRecord, facts: &[String]) -> String {
    format!(
        "Analyze this nutrition label for health warnings and provide suggestions:\n\
         \n\
         Food: {food}\n\
         Calories: {calories}\n\
         Total Fat: {fat}g\n\
         Saturated Fat: {sat_fat}g\n\
         Sodium: {sodium}mg\n\
         Added Sugars: {added}g\n\
         Protein: {protein}g\n\
         \n\
         Context: {context}\n\
         \n\
         Provide health warnings and alternative suggestions:",
        food = record.food_name,
        calories = format_amount(record.calories),
        fat = format_amount(record.total_fat),
        sat_fat = format_amount(record.saturated_fat),
        sodium = format_amount(record.sodium),
        added = format_amount(record.added_sugars),
        protein = format_amount(record.protein),
        context = join_context(facts),
    )
}
