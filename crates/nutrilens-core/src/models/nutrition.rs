// ABOUTME: Nutrition-facts label model and the daily-value nutrient enumeration
// ABOUTME: NutritionRecord, Nutrient, and helpers for rendering label amounts in text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Nutrients that have a reference daily value
///
/// Variant order is the order of the guideline table and drives the order of
/// knowledge sentences and daily-value percentage maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Total fat (g)
    TotalFat,
    /// Saturated fat (g)
    SaturatedFat,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sodium (mg)
    Sodium,
    /// Total carbohydrates (g)
    TotalCarbs,
    /// Dietary fiber (g)
    DietaryFiber,
    /// Protein (g)
    Protein,
    /// Added sugars (g)
    AddedSugars,
}

impl Nutrient {
    /// All nutrients in table order
    pub const ALL: [Self; 9] = [
        Self::Calories,
        Self::TotalFat,
        Self::SaturatedFat,
        Self::Cholesterol,
        Self::Sodium,
        Self::TotalCarbs,
        Self::DietaryFiber,
        Self::Protein,
        Self::AddedSugars,
    ];

    /// Nutrients reported as daily-value percentages on the simplified label
    pub const LABEL_TRACKED: [Self; 8] = [
        Self::Calories,
        Self::TotalFat,
        Self::SaturatedFat,
        Self::Cholesterol,
        Self::Sodium,
        Self::TotalCarbs,
        Self::DietaryFiber,
        Self::Protein,
    ];

    /// Wire identifier (`total_fat`, `added_sugars`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::TotalFat => "total_fat",
            Self::SaturatedFat => "saturated_fat",
            Self::Cholesterol => "cholesterol",
            Self::Sodium => "sodium",
            Self::TotalCarbs => "total_carbs",
            Self::DietaryFiber => "dietary_fiber",
            Self::Protein => "protein",
            Self::AddedSugars => "added_sugars",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrition facts for a single serving of a food item
///
/// Values are taken at face value: negative amounts are not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Total fat (g)
    pub total_fat: f64,
    /// Saturated fat (g)
    pub saturated_fat: f64,
    /// Trans fat (g)
    pub trans_fat: f64,
    /// Cholesterol (mg)
    pub cholesterol: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Total carbohydrates (g)
    pub total_carbs: f64,
    /// Dietary fiber (g)
    pub dietary_fiber: f64,
    /// Total sugars (g)
    pub total_sugars: f64,
    /// Added sugars (g)
    pub added_sugars: f64,
    /// Protein (g)
    pub protein: f64,
    /// Vitamin D (mcg)
    #[serde(default, deserialize_with = "null_as_zero")]
    pub vitamin_d: f64,
    /// Calcium (mg)
    #[serde(default, deserialize_with = "null_as_zero")]
    pub calcium: f64,
    /// Iron (mg)
    #[serde(default, deserialize_with = "null_as_zero")]
    pub iron: f64,
    /// Potassium (mg)
    #[serde(default, deserialize_with = "null_as_zero")]
    pub potassium: f64,
    /// Serving size as printed on the label
    #[serde(default = "default_serving_size", deserialize_with = "null_as_serving_size")]
    pub serving_size: String,
    /// Display name of the food
    #[serde(default = "default_food_name", deserialize_with = "null_as_food_name")]
    pub food_name: String,
}

impl NutritionRecord {
    /// Amount of a daily-value nutrient in this serving
    #[must_use]
    pub const fn amount(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::TotalFat => self.total_fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sodium => self.sodium,
            Nutrient::TotalCarbs => self.total_carbs,
            Nutrient::DietaryFiber => self.dietary_fiber,
            Nutrient::Protein => self.protein,
            Nutrient::AddedSugars => self.added_sugars,
        }
    }

    /// Total carbohydrates minus dietary fiber
    #[must_use]
    pub fn net_carbs(&self) -> f64 {
        self.total_carbs - self.dietary_fiber
    }
}

impl Default for NutritionRecord {
    fn default() -> Self {
        Self {
            calories: 0.0,
            total_fat: 0.0,
            saturated_fat: 0.0,
            trans_fat: 0.0,
            cholesterol: 0.0,
            sodium: 0.0,
            total_carbs: 0.0,
            dietary_fiber: 0.0,
            total_sugars: 0.0,
            added_sugars: 0.0,
            protein: 0.0,
            vitamin_d: 0.0,
            calcium: 0.0,
            iron: 0.0,
            potassium: 0.0,
            serving_size: default_serving_size(),
            food_name: default_food_name(),
        }
    }
}

fn default_serving_size() -> String {
    "1 serving".to_owned()
}

fn default_food_name() -> String {
    "Food Item".to_owned()
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_serving_size<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_serving_size))
}

fn null_as_food_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_food_name))
}

/// Render a label amount the way advisory text shows it
///
/// Whole amounts keep one decimal place (`150.0`), everything else uses the
/// shortest representation that round-trips (`2.5`, `0.333`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
