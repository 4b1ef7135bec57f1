// ABOUTME: Knowledge index of guideline fact sentences with lexical substring retrieval
// ABOUTME: Flattens the guideline table into sentences and returns the first matches for a query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Knowledge Index
//!
//! Retrieval is plain lexical overlap: a sentence matches when it contains any
//! whitespace-separated query word as a case-insensitive substring. Matches are
//! returned in table order; there is no relevance ranking.

use crate::guidelines::GuidelineTable;

#[derive(Debug, Clone)]
struct KnowledgeFact {
    text: String,
    lowered: String,
}

impl KnowledgeFact {
    fn new(text: String) -> Self {
        let lowered = text.to_lowercase();
        Self { text, lowered }
    }
}

/// Ordered collection of guideline fact sentences
#[derive(Debug, Clone, Default)]
pub struct KnowledgeIndex {
    facts: Vec<KnowledgeFact>,
    ready: bool,
}

impl KnowledgeIndex {
    /// Build the index from a guideline table
    ///
    /// One sentence per daily value, then one per health goal, then one per diet.
    #[must_use]
    pub fn build(table: &GuidelineTable) -> Self {
        let daily_values = table
            .daily_values
            .iter()
            .map(|(nutrient, value)| format!("The daily value for {nutrient} is {value}"));
        let goals = table
            .health_goals
            .iter()
            .map(|goal| format!("For {}: {}", goal.id, goal.profile.description));
        let diets = table
            .diet_profiles
            .iter()
            .map(|diet| format!("For {} diet: {}", diet.id, diet.profile.description));

        Self {
            facts: daily_values
                .chain(goals)
                .chain(diets)
                .map(KnowledgeFact::new)
                .collect(),
            ready: true,
        }
    }

    /// Index that was never initialised; every retrieval returns nothing
    #[must_use]
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Whether the index was built successfully
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of indexed sentences
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// True when the index holds no sentences
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Indexed sentences in table order
    pub fn facts(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(|fact| fact.text.as_str())
    }

    /// Return up to `top_k` sentences containing any word of `query`
    #[must_use]
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<String> {
        let query = query.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        self.facts
            .iter()
            .filter(|fact| words.iter().any(|word| fact.lowered.contains(word)))
            .take(top_k)
            .map(|fact| fact.text.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> KnowledgeIndex {
        KnowledgeIndex::build(&GuidelineTable::builtin())
    }

    #[test]
    fn test_one_sentence_per_table_entry() {
        let index = index();
        assert!(index.is_ready());
        assert_eq!(index.len(), 9 + 4 + 5);

        let facts: Vec<&str> = index.facts().collect();
        assert_eq!(facts[0], "The daily value for calories is 2000");
        assert_eq!(
            facts[9],
            "For weight_loss: Focus on low-calorie, high-fiber foods with moderate protein"
        );
        assert_eq!(facts[13], "For keto diet: Very low carb, high fat, moderate protein");
    }

    #[test]
    fn test_retrieve_sodium_sentence() {
        let results = index().retrieve("sodium blood pressure", 3);
        assert!(results.contains(&"The daily value for sodium is 2300".to_owned()));
    }

    #[test]
    fn test_retrieve_is_case_insensitive_and_ordered() {
        let results = index().retrieve("SODIUM", 5);
        assert_eq!(
            results,
            vec![
                "The daily value for sodium is 2300".to_owned(),
                "For heart_health: Low sodium, low saturated fat, high fiber".to_owned(),
                "For low_sodium diet: Reduced sodium intake for heart health".to_owned(),
            ]
        );
    }

    #[test]
    fn test_retrieve_respects_top_k() {
        let results = index().retrieve("diet", 3);
        assert_eq!(results.len(), 3);
        // "dietary_fiber" contains "diet"
        assert_eq!(results[0], "The daily value for dietary_fiber is 25");
        assert!(results[1].starts_with("For keto diet"));
        assert!(results[2].starts_with("For vegan diet"));
    }

    #[test]
    fn test_retrieve_empty_query_returns_nothing() {
        assert!(index().retrieve("   ", 3).is_empty());
    }

    #[test]
    fn test_uninitialized_index_returns_nothing() {
        let index = KnowledgeIndex::uninitialized();
        assert!(!index.is_ready());
        assert!(index.is_empty());
        assert!(index.retrieve("sodium", 3).is_empty());
    }
}
