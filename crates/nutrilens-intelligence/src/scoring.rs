// ABOUTME: Threshold-based scoring for health goals, diets, and overall label quality
// ABOUTME: Also produces warnings, alternative suggestions, improvement tips, and diet concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Scoring Engine
//!
//! Every score starts at 50, applies additive adjustments, and is clamped to
//! `0..=100`. These are heuristics read off a decision table, not estimates.
//!
//! Goal and diet rules are static tables of [`Adjustment`]s so a rule set can be
//! inspected or extended without touching control flow. Overall-health and
//! warning thresholds are expressed as fractions of the daily values in the
//! guideline table the engine was built from.
//!
//! A nutrient missing from that table has no daily value, so the thresholds
//! that read it never fire: an override table without `added_sugars` drops the
//! added-sugar penalty and warning. The built-in table defines all of them.

use crate::guidelines::GuidelineTable;
use nutrilens_core::constants::advisory::{BASE_SCORE, COMPATIBILITY_THRESHOLD};
use nutrilens_core::models::{format_amount, Nutrient, NutritionRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Health goals with dedicated scoring rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Calorie deficit
    WeightLoss,
    /// Protein and calorie surplus
    MuscleGain,
    /// Low sodium and saturated fat
    HeartHealth,
    /// Low added sugar, high fiber
    DiabetesManagement,
}

impl HealthGoal {
    /// Parse a caller-supplied goal id; unknown ids yield `None`
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "weight_loss" => Some(Self::WeightLoss),
            "muscle_gain" => Some(Self::MuscleGain),
            "heart_health" => Some(Self::HeartHealth),
            "diabetes_management" => Some(Self::DiabetesManagement),
            _ => None,
        }
    }

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::HeartHealth => "heart_health",
            Self::DiabetesManagement => "diabetes_management",
        }
    }

    const fn adjustments(self) -> &'static [Adjustment] {
        match self {
            Self::WeightLoss => WEIGHT_LOSS_RULES,
            Self::MuscleGain => MUSCLE_GAIN_RULES,
            Self::HeartHealth => HEART_HEALTH_RULES,
            Self::DiabetesManagement => DIABETES_RULES,
        }
    }
}

/// Diets with dedicated scoring rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Ketogenic
    Keto,
    /// No animal products
    Vegan,
    /// Whole foods only
    Paleo,
    /// Healthy fats, moderate carbs
    Mediterranean,
    /// Reduced sodium
    LowSodium,
}

impl DietType {
    /// Parse a caller-supplied diet id; unknown ids yield `None`
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "keto" => Some(Self::Keto),
            "vegan" => Some(Self::Vegan),
            "paleo" => Some(Self::Paleo),
            "mediterranean" => Some(Self::Mediterranean),
            "low_sodium" => Some(Self::LowSodium),
            _ => None,
        }
    }

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keto => "keto",
            Self::Vegan => "vegan",
            Self::Paleo => "paleo",
            Self::Mediterranean => "mediterranean",
            Self::LowSodium => "low_sodium",
        }
    }

    const fn adjustments(self) -> &'static [Adjustment] {
        match self {
            Self::Keto => KETO_RULES,
            Self::Vegan => VEGAN_RULES,
            Self::LowSodium => LOW_SODIUM_RULES,
            Self::Paleo | Self::Mediterranean => &[],
        }
    }
}

/// One additive scoring rule
#[derive(Clone, Copy)]
pub struct Adjustment {
    /// Short rule label
    pub label: &'static str,
    /// Points added when the rule applies (negative to penalise)
    pub points: i32,
    /// Rule predicate
    pub applies: fn(&NutritionRecord) -> bool,
}

impl fmt::Debug for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adjustment")
            .field("label", &self.label)
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

const WEIGHT_LOSS_RULES: &[Adjustment] = &[
    Adjustment {
        label: "calories below 300",
        points: 20,
        applies: |r| r.calories < 300.0,
    },
    Adjustment {
        label: "total fat below 10g",
        points: 15,
        applies: |r| r.total_fat < 10.0,
    },
    Adjustment {
        label: "added sugars below 5g",
        points: 15,
        applies: |r| r.added_sugars < 5.0,
    },
];

const MUSCLE_GAIN_RULES: &[Adjustment] = &[
    Adjustment {
        label: "protein above 15g",
        points: 25,
        applies: |r| r.protein > 15.0,
    },
    Adjustment {
        label: "calories above 200",
        points: 15,
        applies: |r| r.calories > 200.0,
    },
];

const HEART_HEALTH_RULES: &[Adjustment] = &[
    Adjustment {
        label: "sodium below 400mg",
        points: 20,
        applies: |r| r.sodium < 400.0,
    },
    Adjustment {
        label: "saturated fat below 3g",
        points: 20,
        applies: |r| r.saturated_fat < 3.0,
    },
    Adjustment {
        label: "fiber above 5g",
        points: 10,
        applies: |r| r.dietary_fiber > 5.0,
    },
];

const DIABETES_RULES: &[Adjustment] = &[
    Adjustment {
        label: "added sugars below 3g",
        points: 25,
        applies: |r| r.added_sugars < 3.0,
    },
    Adjustment {
        label: "fiber above 5g",
        points: 15,
        applies: |r| r.dietary_fiber > 5.0,
    },
];

const KETO_RULES: &[Adjustment] = &[
    Adjustment {
        label: "net carbs below 5g",
        points: 30,
        applies: |r| r.net_carbs() < 5.0,
    },
    Adjustment {
        label: "total fat above 15g",
        points: 20,
        applies: |r| r.total_fat > 15.0,
    },
];

const LOW_SODIUM_RULES: &[Adjustment] = &[
    Adjustment {
        label: "sodium below 300mg",
        points: 30,
        applies: |r| r.sodium < 300.0,
    },
    Adjustment {
        label: "sodium below 150mg",
        points: 20,
        applies: |r| r.sodium < 150.0,
    },
];

// The plant-based bonus is granted regardless of cholesterol. This double
// credit is long-standing API behaviour and is kept until product confirms
// the intended rule.
#[allow(clippy::float_cmp)]
const VEGAN_RULES: &[Adjustment] = &[
    Adjustment {
        label: "no cholesterol",
        points: 25,
        applies: |r| r.cholesterol == 0.0,
    },
    Adjustment {
        label: "assumed plant-based",
        points: 25,
        applies: |_| true,
    },
];

fn apply_adjustments(record: &NutritionRecord, adjustments: &[Adjustment]) -> u8 {
    let score = adjustments
        .iter()
        .filter(|adjustment| (adjustment.applies)(record))
        .fold(BASE_SCORE, |score, adjustment| score + adjustment.points);
    clamp_score(score)
}

fn clamp_score(score: i32) -> u8 {
    u8::try_from(score.clamp(0, 100)).unwrap_or(u8::MAX)
}

/// Round to one decimal from the exact binary value, ties to even
///
/// Scaling by ten first would turn `0.44999999999999996` into `4.5` and round
/// it up, so the rounding goes through the correctly-rounded decimal formatter.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Whether a diet score counts as compatible
#[must_use]
pub const fn is_compatible(score: u8) -> bool {
    score >= COMPATIBILITY_THRESHOLD
}

/// Four-tier recommendation text for a suitability score
#[must_use]
pub const fn recommendation(score: u8) -> &'static str {
    match score {
        80.. => "Excellent choice for your health goal!",
        60..=79 => "Good option with minor considerations",
        40..=59 => "Okay choice, but could be better",
        _ => "Consider healthier alternatives",
    }
}

/// Deterministic scoring engine bound to a set of daily values
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    daily_values: BTreeMap<Nutrient, u32>,
}

impl ScoringEngine {
    /// Create an engine using the daily values of `table`
    #[must_use]
    pub fn new(table: &GuidelineTable) -> Self {
        Self {
            daily_values: table.daily_values.clone(),
        }
    }

    /// `fraction` of the daily value for `nutrient`, if the table defines one
    fn dv_fraction(&self, nutrient: Nutrient, fraction: f64) -> Option<f64> {
        self.daily_values
            .get(&nutrient)
            .map(|value| f64::from(*value) * fraction)
    }

    /// True when the record's amount exceeds `fraction` of the daily value
    ///
    /// Always false when the table has no daily value for `nutrient`.
    fn exceeds_dv(&self, record: &NutritionRecord, nutrient: Nutrient, fraction: f64) -> bool {
        self.dv_fraction(nutrient, fraction)
            .is_some_and(|limit| record.amount(nutrient) > limit)
    }

    /// Suitability of a food for a health goal
    #[must_use]
    pub fn health_goal_score(&self, record: &NutritionRecord, goal: Option<HealthGoal>) -> u8 {
        goal.map_or_else(
            || clamp_score(BASE_SCORE),
            |goal| apply_adjustments(record, goal.adjustments()),
        )
    }

    /// Compatibility of a food with a diet
    #[must_use]
    pub fn diet_compatibility_score(&self, record: &NutritionRecord, diet: Option<DietType>) -> u8 {
        diet.map_or_else(
            || clamp_score(BASE_SCORE),
            |diet| apply_adjustments(record, diet.adjustments()),
        )
    }

    /// General healthiness of a food independent of goals
    #[must_use]
    pub fn overall_health_score(&self, record: &NutritionRecord) -> u8 {
        let mut score = BASE_SCORE;

        if record.dietary_fiber > 5.0 {
            score += 15;
        }
        if record.protein > 10.0 {
            score += 10;
        }

        if self.exceeds_dv(record, Nutrient::AddedSugars, 0.2) {
            score -= 15;
        }
        if self.exceeds_dv(record, Nutrient::Sodium, 0.3) {
            score -= 15;
        }
        if self.exceeds_dv(record, Nutrient::SaturatedFat, 0.3) {
            score -= 10;
        }

        clamp_score(score)
    }

    /// Percent of daily value for each label-tracked nutrient, rounded to 0.1
    #[must_use]
    pub fn daily_value_percentages(&self, record: &NutritionRecord) -> BTreeMap<Nutrient, f64> {
        Nutrient::LABEL_TRACKED
            .iter()
            .filter_map(|nutrient| {
                self.daily_values.get(nutrient).map(|daily_value| {
                    let percent = record.amount(*nutrient) / f64::from(*daily_value) * 100.0;
                    (*nutrient, round_one_decimal(percent))
                })
            })
            .collect()
    }

    /// Warnings for nutrients well above their daily share
    #[must_use]
    pub fn health_warnings(&self, record: &NutritionRecord) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.exceeds_dv(record, Nutrient::Sodium, 0.4) {
            warnings.push("⚠️ High sodium content - may affect blood pressure".to_owned());
        }
        if self.exceeds_dv(record, Nutrient::AddedSugars, 0.3) {
            warnings.push("⚠️ High added sugars - may cause blood sugar spikes".to_owned());
        }
        if self.exceeds_dv(record, Nutrient::SaturatedFat, 0.4) {
            warnings.push("⚠️ High saturated fat - may impact heart health".to_owned());
        }
        if record.calories > 500.0 {
            warnings.push("⚠️ High calorie content - consume in moderation".to_owned());
        }

        warnings
    }

    /// Healthier swaps for the weak spots of a label
    #[must_use]
    pub fn healthy_alternatives(&self, record: &NutritionRecord) -> Vec<String> {
        let mut suggestions = Vec::new();

        if record.added_sugars > 10.0 {
            suggestions.push("🍎 Try fresh fruits instead of processed sweets".to_owned());
        }
        if record.sodium > 600.0 {
            suggestions.push("🥗 Look for low-sodium versions or fresh alternatives".to_owned());
        }
        if record.saturated_fat > 10.0 {
            suggestions
                .push("🥑 Consider foods with healthy fats like avocados or nuts".to_owned());
        }
        if record.dietary_fiber < 3.0 {
            suggestions.push("🌾 Add more fiber-rich foods like whole grains".to_owned());
        }

        suggestions
    }

    /// Tips for rounding out a meal built around this food
    #[must_use]
    pub fn improvement_tips(&self, record: &NutritionRecord) -> Vec<String> {
        let mut tips = Vec::new();

        if record.protein < 10.0 {
            tips.push("💪 Add more protein sources to your meal".to_owned());
        }
        if record.dietary_fiber < 5.0 {
            tips.push("🌿 Include more vegetables and whole grains".to_owned());
        }
        if record.added_sugars > 15.0 {
            tips.push("🍯 Try natural sweeteners instead of added sugars".to_owned());
        }

        tips
    }

    /// Diet-specific problems with a label
    #[must_use]
    pub fn diet_specific_concerns(
        &self,
        record: &NutritionRecord,
        diet: Option<DietType>,
    ) -> Vec<String> {
        let mut concerns = Vec::new();

        match diet {
            Some(DietType::Keto) => {
                let net_carbs = record.net_carbs();
                if net_carbs > 10.0 {
                    concerns.push(format!("High net carbs: {}g", format_amount(net_carbs)));
                }
            }
            Some(DietType::LowSodium) => {
                if record.sodium > 400.0 {
                    concerns.push(format!("High sodium: {}mg", format_amount(record.sodium)));
                }
            }
            Some(DietType::Vegan) => {
                if record.cholesterol > 0.0 {
                    concerns.push("Contains cholesterol (not vegan)".to_owned());
                }
            }
            Some(DietType::Paleo | DietType::Mediterranean) | None => {}
        }

        concerns
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(&GuidelineTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ScoringEngine {
        ScoringEngine::default()
    }

    fn greek_yogurt() -> NutritionRecord {
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
            serving_size: "1 cup".to_owned(),
            ..NutritionRecord::default()
        }
    }

    #[test]
    fn test_muscle_gain_calories_threshold_is_strict() {
        let record = NutritionRecord {
            protein: 30.0,
            calories: 200.0,
            ..NutritionRecord::default()
        };
        let score = engine().health_goal_score(&record, Some(HealthGoal::MuscleGain));
        assert_eq!(score, 75);
    }

    #[test]
    fn test_weight_loss_full_marks() {
        let record = NutritionRecord {
            calories: 120.0,
            total_fat: 2.0,
            added_sugars: 0.0,
            ..NutritionRecord::default()
        };
        assert_eq!(
            engine().health_goal_score(&record, Some(HealthGoal::WeightLoss)),
            100
        );
    }

    #[test]
    fn test_goal_scores_for_sample_label() {
        let engine = engine();
        let record = greek_yogurt();
        assert_eq!(engine.health_goal_score(&record, Some(HealthGoal::WeightLoss)), 85);
        assert_eq!(engine.health_goal_score(&record, Some(HealthGoal::MuscleGain)), 50);
        assert_eq!(engine.health_goal_score(&record, Some(HealthGoal::HeartHealth)), 70);
        assert_eq!(
            engine.health_goal_score(&record, Some(HealthGoal::DiabetesManagement)),
            50
        );
    }

    #[test]
    fn test_unknown_goal_and_diet_use_base_score() {
        let engine = engine();
        let record = greek_yogurt();
        assert_eq!(engine.health_goal_score(&record, HealthGoal::from_id("bulking")), 50);
        assert_eq!(engine.diet_compatibility_score(&record, DietType::from_id("raw")), 50);
        assert_eq!(engine.diet_compatibility_score(&record, Some(DietType::Paleo)), 50);
    }

    #[test]
    fn test_keto_full_compatibility() {
        let record = NutritionRecord {
            total_carbs: 10.0,
            dietary_fiber: 8.0,
            total_fat: 20.0,
            ..NutritionRecord::default()
        };
        let score = engine().diet_compatibility_score(&record, Some(DietType::Keto));
        assert_eq!(score, 100);
        assert!(is_compatible(score));
    }

    #[test]
    fn test_low_sodium_bonuses_stack() {
        let engine = engine();
        let very_low = NutritionRecord {
            sodium: 100.0,
            ..NutritionRecord::default()
        };
        let low = NutritionRecord {
            sodium: 200.0,
            ..NutritionRecord::default()
        };
        assert_eq!(engine.diet_compatibility_score(&very_low, Some(DietType::LowSodium)), 100);
        assert_eq!(engine.diet_compatibility_score(&low, Some(DietType::LowSodium)), 80);
    }

    #[test]
    fn test_vegan_plant_based_bonus_is_unconditional() {
        let engine = engine();
        let no_cholesterol = NutritionRecord::default();
        assert_eq!(
            engine.diet_compatibility_score(&no_cholesterol, Some(DietType::Vegan)),
            100
        );
        assert_eq!(
            engine.diet_compatibility_score(&greek_yogurt(), Some(DietType::Vegan)),
            75
        );
    }

    #[test]
    fn test_is_compatible_threshold() {
        assert!(is_compatible(70));
        assert!(!is_compatible(69));
    }

    #[test]
    fn test_overall_health_score_penalties() {
        let engine = engine();
        let junk = NutritionRecord {
            added_sugars: 30.0,
            sodium: 900.0,
            saturated_fat: 9.0,
            ..NutritionRecord::default()
        };
        assert_eq!(engine.overall_health_score(&junk), 10);

        let wholesome = NutritionRecord {
            dietary_fiber: 8.0,
            protein: 20.0,
            ..NutritionRecord::default()
        };
        assert_eq!(engine.overall_health_score(&wholesome), 75);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let engine = engine();
        let extremes = [
            NutritionRecord::default(),
            NutritionRecord {
                calories: 5000.0,
                total_fat: 300.0,
                saturated_fat: 200.0,
                cholesterol: 900.0,
                sodium: 10_000.0,
                total_carbs: 500.0,
                added_sugars: 400.0,
                ..NutritionRecord::default()
            },
            NutritionRecord {
                dietary_fiber: 50.0,
                protein: 90.0,
                ..NutritionRecord::default()
            },
        ];
        let goals = [
            HealthGoal::WeightLoss,
            HealthGoal::MuscleGain,
            HealthGoal::HeartHealth,
            HealthGoal::DiabetesManagement,
        ];
        let diets = [
            DietType::Keto,
            DietType::Vegan,
            DietType::Paleo,
            DietType::Mediterranean,
            DietType::LowSodium,
        ];

        for record in &extremes {
            assert!(engine.overall_health_score(record) <= 100);
            for goal in goals {
                assert!(engine.health_goal_score(record, Some(goal)) <= 100);
            }
            for diet in diets {
                assert!(engine.diet_compatibility_score(record, Some(diet)) <= 100);
            }
        }
    }

    #[test]
    fn test_daily_value_percentages() {
        let percentages = engine().daily_value_percentages(&greek_yogurt());
        assert_eq!(percentages.len(), 8);
        assert!((percentages[&Nutrient::Sodium] - 4.3).abs() < f64::EPSILON);
        assert!((percentages[&Nutrient::Calories] - 7.5).abs() < f64::EPSILON);
        assert!((percentages[&Nutrient::SaturatedFat] - 25.0).abs() < f64::EPSILON);
        assert!(!percentages.contains_key(&Nutrient::AddedSugars));
    }

    #[test]
    fn test_missing_daily_value_disables_its_thresholds() {
        let table =
            GuidelineTable::from_json_str(r#"{"daily_values": {"sodium": 2300}}"#).unwrap();
        let sugary = NutritionRecord {
            added_sugars: 30.0,
            ..greek_yogurt()
        };

        let builtin = engine();
        assert_eq!(builtin.health_warnings(&sugary).len(), 1);
        assert_eq!(builtin.overall_health_score(&sugary), 45);

        let sodium_only = ScoringEngine::new(&table);
        assert!(sodium_only.health_warnings(&sugary).is_empty());
        assert_eq!(sodium_only.overall_health_score(&sugary), 60);
    }

    #[test]
    fn test_daily_value_percentages_round_from_exact_value() {
        let percent_for = |calories: f64| {
            let record = NutritionRecord {
                calories,
                ..greek_yogurt()
            };
            engine().daily_value_percentages(&record)[&Nutrient::Calories]
        };

        for (calories, expected) in [(3.0, 0.1), (5.0, 0.2), (9.0, 0.4), (25.0, 1.2), (45.0, 2.2)] {
            let percent = percent_for(calories);
            assert!(
                (percent - expected).abs() < f64::EPSILON,
                "calories={calories} gave {percent}, expected {expected}"
            );
        }
        assert!((percent_for(150.0) - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sodium_warning_threshold() {
        let engine = engine();
        let salty = NutritionRecord {
            sodium: 1200.0,
            ..NutritionRecord::default()
        };
        let moderate = NutritionRecord {
            sodium: 500.0,
            ..NutritionRecord::default()
        };
        assert!(engine
            .health_warnings(&salty)
            .iter()
            .any(|w| w.contains("High sodium")));
        assert!(engine.health_warnings(&moderate).is_empty());
    }

    #[test]
    fn test_alternatives_and_tips_for_sample_label() {
        let engine = engine();
        let record = greek_yogurt();
        assert_eq!(
            engine.healthy_alternatives(&record),
            vec!["🌾 Add more fiber-rich foods like whole grains".to_owned()]
        );
        assert_eq!(
            engine.improvement_tips(&record),
            vec!["🌿 Include more vegetables and whole grains".to_owned()]
        );
    }

    #[test]
    fn test_diet_specific_concerns() {
        let engine = engine();
        let carby = NutritionRecord {
            total_carbs: 20.0,
            dietary_fiber: 4.0,
            sodium: 450.0,
            cholesterol: 5.0,
            ..NutritionRecord::default()
        };
        assert_eq!(
            engine.diet_specific_concerns(&carby, Some(DietType::Keto)),
            vec!["High net carbs: 16.0g".to_owned()]
        );
        assert_eq!(
            engine.diet_specific_concerns(&carby, Some(DietType::LowSodium)),
            vec!["High sodium: 450.0mg".to_owned()]
        );
        assert_eq!(
            engine.diet_specific_concerns(&carby, Some(DietType::Vegan)),
            vec!["Contains cholesterol (not vegan)".to_owned()]
        );
        assert!(engine.diet_specific_concerns(&carby, None).is_empty());
    }

    #[test]
    fn test_recommendation_tiers() {
        assert_eq!(recommendation(100), "Excellent choice for your health goal!");
        assert_eq!(recommendation(80), "Excellent choice for your health goal!");
        assert_eq!(recommendation(79), "Good option with minor considerations");
        assert_eq!(recommendation(40), "Okay choice, but could be better");
        assert_eq!(recommendation(39), "Consider healthier alternatives");
    }

    #[test]
    fn test_id_round_trip() {
        for id in ["weight_loss", "muscle_gain", "heart_health", "diabetes_management"] {
            assert_eq!(HealthGoal::from_id(id).map(HealthGoal::as_str), Some(id));
        }
        for id in ["keto", "vegan", "paleo", "mediterranean", "low_sodium"] {
            assert_eq!(DietType::from_id(id).map(DietType::as_str), Some(id));
        }
    }
}
