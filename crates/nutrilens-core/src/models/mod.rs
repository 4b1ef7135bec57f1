// ABOUTME: Core data models shared by the intelligence engine and HTTP layer
// ABOUTME: Re-exports the nutrition label model and nutrient enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

/// Nutrition-facts label model
pub mod nutrition;

pub use nutrition::{format_amount, Nutrient, NutritionRecord};
