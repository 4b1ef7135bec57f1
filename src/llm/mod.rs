// ABOUTME: Text generation abstraction for advisory narratives
// ABOUTME: Defines the TextGenerator contract and ships the rule-based implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! # Text Generation
//!
//! Every advisory operation renders a prompt and hands it to a
//! [`TextGenerator`]. The shipped generator is [`RuleBasedGenerator`], which
//! runs the keyword rule chain from `nutrilens-intelligence` over the prompt
//! and never calls out to a model. A learned model can be plugged in later by
//! implementing the trait; handlers do not change.
//!
//! ```rust,no_run
//! use nutrilens::llm::{RuleBasedGenerator, TextGenerator};
//!
//! async fn example() {
//!     let generator = RuleBasedGenerator::new();
//!     let text = generator.generate("Simplify this label. Calories: 150.0").await;
//! }
//! ```

/// Prompt templates for each advisory operation
pub mod prompts;

mod rule_based;

pub use rule_based::RuleBasedGenerator;

use async_trait::async_trait;
use nutrilens_core::errors::AppError;

/// Contract for anything that turns a prompt into narrative text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Stable generator identifier (e.g. `"rule_based"`)
    fn name(&self) -> &'static str;

    /// Produce narrative text for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
