// ABOUTME: Rule-based TextGenerator backed by the keyword response composer
// ABOUTME: Deterministic; the same prompt always yields the same sentence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use super::TextGenerator;
use async_trait::async_trait;
use nutrilens_core::errors::AppError;
use nutrilens_intelligence::ResponseComposer;
use tracing::debug;

/// Generator that answers from the ordered keyword rule chain
#[derive(Debug, Clone, Default)]
pub struct RuleBasedGenerator {
    composer: ResponseComposer,
}

impl RuleBasedGenerator {
    /// Generator using the standard advisory rules
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TextGenerator for RuleBasedGenerator {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let intent = self.composer.classify(prompt);
        debug!(generator = self.name(), ?intent, "Composing rule-based response");
        Ok(self.composer.compose(prompt).to_owned())
    }
}
