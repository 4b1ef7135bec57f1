// ABOUTME: Nutrition guideline table with daily values, health-goal and diet profiles
// ABOUTME: Built-in reference data plus loading and validation of JSON override files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Guideline Table
//!
//! The table is the single source of reference data for the advisory engine:
//! daily values used for percentage and threshold calculations, and the
//! descriptors returned as `goal_info` / `diet_info`. It is read-only once
//! constructed.
//!
//! An override file uses the same JSON shape the table serializes to:
//!
//! ```json
//! {
//!   "daily_values": { "calories": 2000, "sodium": 2300 },
//!   "health_goals": [ { "id": "weight_loss", "description": "...", "limits": { "calories": 1500 } } ],
//!   "diet_profiles": [ { "id": "vegan", "description": "...", "restrictions": ["cholesterol"] } ]
//! }
//! ```

use nutrilens_core::models::Nutrient;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating a guideline table
#[derive(Debug, Error)]
pub enum GuidelineError {
    /// Override file could not be read
    #[error("Failed to read guideline file {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Override file is not valid guideline JSON
    #[error("Invalid guideline JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A daily value of zero would make percentages undefined
    #[error("Daily value for {0} must be greater than zero")]
    ZeroDailyValue(Nutrient),

    /// Profile without an identifier
    #[error("Empty profile id in {0}")]
    EmptyId(&'static str),

    /// Two profiles share an identifier within one section
    #[error("Duplicate profile id '{id}' in {section}")]
    DuplicateId {
        /// Table section (`health_goals` or `diet_profiles`)
        section: &'static str,
        /// Repeated identifier
        id: String,
    },
}

/// Descriptor for a health goal or diet
///
/// Every part is optional; a default profile serializes to `{}`, which is what
/// callers receive for identifiers the table does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineProfile {
    /// One-line summary of the goal or diet
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Upper bounds per nutrient
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub limits: BTreeMap<String, u32>,
    /// Amounts to aim for per nutrient
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub targets: BTreeMap<String, u32>,
    /// Components the diet excludes outright
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<String>,
    /// Components to keep away from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid: Vec<String>,
    /// Components to favour
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub encourage: Vec<String>,
}

impl GuidelineProfile {
    /// Create a profile with only a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Attach nutrient limits
    #[must_use]
    pub fn with_limits(mut self, entries: &[(&str, u32)]) -> Self {
        self.limits = to_threshold_map(entries);
        self
    }

    /// Attach nutrient targets
    #[must_use]
    pub fn with_targets(mut self, entries: &[(&str, u32)]) -> Self {
        self.targets = to_threshold_map(entries);
        self
    }

    /// Attach hard restrictions
    #[must_use]
    pub fn with_restrictions(mut self, items: &[&str]) -> Self {
        self.restrictions = to_list(items);
        self
    }

    /// Attach components to avoid
    #[must_use]
    pub fn with_avoid(mut self, items: &[&str]) -> Self {
        self.avoid = to_list(items);
        self
    }

    /// Attach components to encourage
    #[must_use]
    pub fn with_encourage(mut self, items: &[&str]) -> Self {
        self.encourage = to_list(items);
        self
    }

    /// True when no part of the profile is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn to_threshold_map(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_owned(), *value))
        .collect()
}

fn to_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// A profile together with its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedProfile {
    /// Identifier used by API callers (`weight_loss`, `keto`, ...)
    pub id: String,
    /// Profile contents
    #[serde(flatten)]
    pub profile: GuidelineProfile,
}

impl NamedProfile {
    fn new(id: &str, profile: GuidelineProfile) -> Self {
        Self {
            id: id.to_owned(),
            profile,
        }
    }
}

/// Reference data for the advisory engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineTable {
    /// Daily reference amount per nutrient
    pub daily_values: BTreeMap<Nutrient, u32>,
    /// Health goals in presentation order
    #[serde(default)]
    pub health_goals: Vec<NamedProfile>,
    /// Diets in presentation order
    #[serde(default)]
    pub diet_profiles: Vec<NamedProfile>,
}

impl GuidelineTable {
    /// Built-in reference table
    #[must_use]
    pub fn builtin() -> Self {
        let daily_values = BTreeMap::from([
            (Nutrient::Calories, 2000),
            (Nutrient::TotalFat, 65),
            (Nutrient::SaturatedFat, 20),
            (Nutrient::Cholesterol, 300),
            (Nutrient::Sodium, 2300),
            (Nutrient::TotalCarbs, 300),
            (Nutrient::DietaryFiber, 25),
            (Nutrient::Protein, 50),
            (Nutrient::AddedSugars, 50),
        ]);

        let health_goals = vec![
            NamedProfile::new(
                "weight_loss",
                GuidelineProfile::new(
                    "Focus on low-calorie, high-fiber foods with moderate protein",
                )
                .with_limits(&[("calories", 1500), ("total_fat", 50), ("added_sugars", 25)]),
            ),
            NamedProfile::new(
                "muscle_gain",
                GuidelineProfile::new("High protein intake with balanced carbs and healthy fats")
                    .with_targets(&[("protein", 80), ("calories", 2500)]),
            ),
            NamedProfile::new(
                "heart_health",
                GuidelineProfile::new("Low sodium, low saturated fat, high fiber")
                    .with_limits(&[("sodium", 1500), ("saturated_fat", 13)]),
            ),
            NamedProfile::new(
                "diabetes_management",
                GuidelineProfile::new("Low added sugars, high fiber, moderate carbs")
                    .with_limits(&[("added_sugars", 25), ("total_carbs", 200)]),
            ),
        ];

        let diet_profiles = vec![
            NamedProfile::new(
                "keto",
                GuidelineProfile::new("Very low carb, high fat, moderate protein")
                    .with_limits(&[("total_carbs", 30), ("net_carbs", 20)])
                    .with_targets(&[("total_fat", 70)]),
            ),
            NamedProfile::new(
                "vegan",
                GuidelineProfile::new("Plant-based diet, no animal products")
                    .with_restrictions(&["cholesterol", "animal_fats"]),
            ),
            NamedProfile::new(
                "paleo",
                GuidelineProfile::new("Whole foods, no processed ingredients")
                    .with_avoid(&["added_sugars", "processed_foods"]),
            ),
            NamedProfile::new(
                "mediterranean",
                GuidelineProfile::new("Healthy fats, moderate carbs, lean proteins")
                    .with_encourage(&["healthy_fats", "fiber", "moderate_sodium"]),
            ),
            NamedProfile::new(
                "low_sodium",
                GuidelineProfile::new("Reduced sodium intake for heart health")
                    .with_limits(&[("sodium", 1500)]),
            ),
        ];

        Self {
            daily_values,
            health_goals,
            diet_profiles,
        }
    }

    /// Parse and validate a table from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a table or fails validation
    pub fn from_json_str(json: &str) -> Result<Self, GuidelineError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(path: &Path) -> Result<Self, GuidelineError> {
        let json = fs::read_to_string(path).map_err(|source| GuidelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            goals = table.health_goals.len(),
            diets = table.diet_profiles.len(),
            "Loaded guideline table"
        );
        Ok(table)
    }

    /// Check table invariants
    ///
    /// # Errors
    ///
    /// Returns an error for zero daily values, empty ids, or duplicate ids
    pub fn validate(&self) -> Result<(), GuidelineError> {
        if let Some((nutrient, _)) = self.daily_values.iter().find(|(_, value)| **value == 0) {
            return Err(GuidelineError::ZeroDailyValue(*nutrient));
        }
        validate_section("health_goals", &self.health_goals)?;
        validate_section("diet_profiles", &self.diet_profiles)
    }

    /// Daily reference amount for a nutrient, if the table has one
    #[must_use]
    pub fn daily_value(&self, nutrient: Nutrient) -> Option<u32> {
        self.daily_values.get(&nutrient).copied()
    }

    /// Profile for a health goal id
    #[must_use]
    pub fn health_goal(&self, id: &str) -> Option<&GuidelineProfile> {
        find_profile(&self.health_goals, id)
    }

    /// Profile for a diet id
    #[must_use]
    pub fn diet_profile(&self, id: &str) -> Option<&GuidelineProfile> {
        find_profile(&self.diet_profiles, id)
    }
}

impl Default for GuidelineTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn find_profile<'a>(profiles: &'a [NamedProfile], id: &str) -> Option<&'a GuidelineProfile> {
    profiles
        .iter()
        .find(|named| named.id == id)
        .map(|named| &named.profile)
}

fn validate_section(section: &'static str, profiles: &[NamedProfile]) -> Result<(), GuidelineError> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for named in profiles {
        if named.id.trim().is_empty() {
            return Err(GuidelineError::EmptyId(section));
        }
        if !seen.insert(named.id.as_str()) {
            return Err(GuidelineError::DuplicateId {
                section,
                id: named.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_builtin_daily_values() {
        let table = GuidelineTable::builtin();
        assert_eq!(table.daily_value(Nutrient::Sodium), Some(2300));
        assert_eq!(table.daily_value(Nutrient::AddedSugars), Some(50));
        assert_eq!(table.daily_values.len(), Nutrient::ALL.len());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_lookup_known_and_unknown_ids() {
        let table = GuidelineTable::builtin();
        let keto = table.diet_profile("keto").unwrap();
        assert_eq!(keto.description, "Very low carb, high fat, moderate protein");
        assert_eq!(keto.limits.get("net_carbs"), Some(&20));
        assert!(table.diet_profile("carnivore").is_none());
        assert!(table.health_goal("keto").is_none());
    }

    #[test]
    fn test_profile_serialization_omits_absent_parts() {
        let table = GuidelineTable::builtin();
        let vegan = serde_json::to_value(table.diet_profile("vegan").unwrap()).unwrap();
        assert_eq!(
            vegan,
            json!({
                "description": "Plant-based diet, no animal products",
                "restrictions": ["cholesterol", "animal_fats"]
            })
        );
        assert_eq!(serde_json::to_value(GuidelineProfile::default()).unwrap(), json!({}));
        assert!(GuidelineProfile::default().is_empty());
    }

    #[test]
    fn test_json_round_trip_preserves_profile_order() {
        let table = GuidelineTable::builtin();
        let json = serde_json::to_string(&table).unwrap();
        let parsed = GuidelineTable::from_json_str(&json).unwrap();
        assert_eq!(parsed, table);
        let ids: Vec<&str> = parsed.diet_profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["keto", "vegan", "paleo", "mediterranean", "low_sodium"]);
    }

    #[test]
    fn test_validation_rejects_zero_daily_value() {
        let json = json!({ "daily_values": { "sodium": 0 } }).to_string();
        let err = GuidelineTable::from_json_str(&json).unwrap_err();
        assert!(matches!(err, GuidelineError::ZeroDailyValue(Nutrient::Sodium)));
    }

    #[test]
    fn test_validation_rejects_duplicate_ids() {
        let json = json!({
            "daily_values": { "calories": 2000 },
            "diet_profiles": [
                { "id": "keto", "description": "a" },
                { "id": "keto", "description": "b" }
            ]
        })
        .to_string();
        let err = GuidelineTable::from_json_str(&json).unwrap_err();
        assert!(matches!(err, GuidelineError::DuplicateId { section: "diet_profiles", .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = json!({
            "daily_values": { "calories": 1800 },
            "health_goals": [{ "id": "endurance", "description": "Carbs for long efforts" }]
        });
        write!(file, "{json}").unwrap();

        let table = GuidelineTable::load(file.path()).unwrap();
        assert_eq!(table.daily_value(Nutrient::Calories), Some(1800));
        assert_eq!(table.daily_value(Nutrient::Sodium), None);
        assert_eq!(
            table.health_goal("endurance").unwrap().description,
            "Carbs for long efforts"
        );
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = GuidelineTable::load(Path::new("/nonexistent/guidelines.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/guidelines.json"));
    }
}
