// ABOUTME: Input loading helpers for nutrilens-cli
// ABOUTME: Reads and parses a nutrition facts JSON file into a NutritionRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use anyhow::{Context, Result};
use nutrilens_core::models::NutritionRecord;
use std::fs;
use std::path::Path;

/// Load a nutrition record from `path`
pub fn load_record(path: &Path) -> Result<NutritionRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read nutrition file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid nutrition facts in {}", path.display()))
}
