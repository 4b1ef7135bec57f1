// ABOUTME: Shared immutable resources for the advisory service
// ABOUTME: Built once at startup and shared across handlers through an Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Advisor resources
//!
//! Startup never fails on bad reference data. If the guideline override file
//! cannot be loaded the service still starts: scoring uses the built-in table,
//! the knowledge index stays uninitialised, and health reports
//! `models_loaded = false`.

use crate::config::ServerConfig;
use crate::llm::{RuleBasedGenerator, TextGenerator};
use crate::logging::AdvisoryLogger;
use chrono::{DateTime, Utc};
use nutrilens_core::constants::advisory::DEFAULT_KNOWLEDGE_TOP_K;
use nutrilens_intelligence::{GuidelineTable, KnowledgeIndex, ScoringEngine};
use std::fmt;
use std::sync::Arc;

/// Everything a request handler needs, constructed once
pub struct AdvisorResources {
    guidelines: GuidelineTable,
    knowledge: KnowledgeIndex,
    scoring: ScoringEngine,
    generator: Arc<dyn TextGenerator>,
    top_k: usize,
    started_at: DateTime<Utc>,
}

impl AdvisorResources {
    /// Build resources from configuration, degrading instead of failing
    #[must_use]
    pub fn initialize(config: &ServerConfig) -> Self {
        let top_k = config.knowledge.top_k;

        let Some(path) = config.knowledge.guidelines_path.as_deref() else {
            return Self::from_table(GuidelineTable::builtin(), top_k);
        };

        match GuidelineTable::load(path) {
            Ok(table) => Self::from_table(table, top_k),
            Err(e) => {
                AdvisoryLogger::log_degraded_startup(&e.to_string());
                Self::degraded(top_k)
            }
        }
    }

    /// Fully initialised resources over `table`
    #[must_use]
    pub fn from_table(guidelines: GuidelineTable, top_k: usize) -> Self {
        let knowledge = KnowledgeIndex::build(&guidelines);
        AdvisoryLogger::log_engine_ready(
            knowledge.len(),
            guidelines.health_goals.len(),
            guidelines.diet_profiles.len(),
        );
        Self::assemble(guidelines, knowledge, top_k)
    }

    /// Degraded resources: built-in scoring, no knowledge retrieval
    #[must_use]
    pub fn degraded(top_k: usize) -> Self {
        Self::assemble(GuidelineTable::builtin(), KnowledgeIndex::uninitialized(), top_k)
    }

    fn assemble(guidelines: GuidelineTable, knowledge: KnowledgeIndex, top_k: usize) -> Self {
        let scoring = ScoringEngine::new(&guidelines);
        Self {
            guidelines,
            knowledge,
            scoring,
            generator: Arc::new(RuleBasedGenerator::new()),
            top_k,
            started_at: Utc::now(),
        }
    }

    /// Replace the text generator
    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Active guideline table
    #[must_use]
    pub const fn guidelines(&self) -> &GuidelineTable {
        &self.guidelines
    }

    /// Knowledge index (may be uninitialised)
    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeIndex {
        &self.knowledge
    }

    /// Scoring engine bound to the active daily values
    #[must_use]
    pub const fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    /// Text generator used for narratives
    #[must_use]
    pub fn generator(&self) -> &dyn TextGenerator {
        self.generator.as_ref()
    }

    /// Facts retrieved per query
    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Whether startup completed without degradation
    #[must_use]
    pub const fn models_loaded(&self) -> bool {
        self.knowledge.is_ready()
    }

    /// When these resources were built
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for AdvisorResources {
    fn default() -> Self {
        Self::from_table(GuidelineTable::builtin(), DEFAULT_KNOWLEDGE_TOP_K)
    }
}

impl fmt::Debug for AdvisorResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorResources")
            .field("facts", &self.knowledge.len())
            .field("generator", &self.generator.name())
            .field("top_k", &self.top_k)
            .field("models_loaded", &self.models_loaded())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_resources_are_ready() {
        let resources = AdvisorResources::initialize(&ServerConfig::default());
        assert!(resources.models_loaded());
        assert_eq!(resources.knowledge().len(), 18);
        assert_eq!(resources.top_k(), 3);
        assert_eq!(resources.generator().name(), "rule_based");
    }

    #[test]
    fn test_missing_guideline_file_degrades() {
        let mut config = ServerConfig::default();
        config.knowledge.guidelines_path = Some(PathBuf::from("/nonexistent/guidelines.json"));

        let resources = AdvisorResources::initialize(&config);
        assert!(!resources.models_loaded());
        assert!(resources.knowledge().is_empty());
        assert_eq!(resources.guidelines(), &GuidelineTable::builtin());
    }

    #[test]
    fn test_override_file_replaces_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "daily_values": {{ "sodium": 1500 }},
                "health_goals": [{{ "id": "endurance", "description": "Steady carbs" }}],
                "diet_profiles": []
            }}"#
        )
        .unwrap();

        let mut config = ServerConfig::default();
        config.knowledge.guidelines_path = Some(file.path().to_path_buf());

        let resources = AdvisorResources::initialize(&config);
        assert!(resources.models_loaded());
        assert_eq!(resources.knowledge().len(), 2);
        assert!(resources.guidelines().health_goal("endurance").is_some());
    }
}
