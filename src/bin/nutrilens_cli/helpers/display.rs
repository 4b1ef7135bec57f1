// ABOUTME: Output formatting helpers for nutrilens-cli
// ABOUTME: Prints advisory responses as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use anyhow::Result;
use serde_json::Value;

/// Print a response, pretty-printed unless `compact` is set
pub fn print_json(value: &Value, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
