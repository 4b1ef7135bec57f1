// ABOUTME: Keyword-driven response composer producing canned advisory narratives
// ABOUTME: Evaluates an ordered rule list over prompt text; the first matching rule answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Response Composer
//!
//! A rule fires when the lower-cased prompt contains any of its trigger
//! keywords. Inside a rule, refinements are checked in order and the first one
//! whose keyword appears supplies the sentence; otherwise the rule's own
//! fallback answers. Rules never fall through to the next rule once triggered.

use serde::{Deserialize, Serialize};

/// Which family of question a prompt was classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Label simplification
    Simplify,
    /// Health goal suitability
    HealthGoal,
    /// Diet compatibility
    Diet,
    /// Free-form question
    Question,
    /// Warnings and alerts
    Warnings,
    /// Nothing matched
    General,
}

/// Sub-case of a rule selected by a single keyword
#[derive(Debug, Clone, Copy)]
pub struct Refinement {
    /// Keyword that selects this sub-case
    pub keyword: &'static str,
    /// Sentence returned for this sub-case
    pub response: &'static str,
}

/// One entry of the ordered rule list
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    /// Intent reported when this rule fires
    pub intent: Intent,
    /// Any of these keywords fires the rule
    pub triggers: &'static [&'static str],
    /// Checked in order after the rule fires
    pub refinements: &'static [Refinement],
    /// Sentence used when no refinement matches
    pub fallback: &'static str,
}

impl ResponseRule {
    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|keyword| lowered.contains(keyword))
    }

    fn respond(&self, lowered: &str) -> &'static str {
        self.refinements
            .iter()
            .find(|refinement| lowered.contains(refinement.keyword))
            .map_or(self.fallback, |refinement| refinement.response)
    }
}

const GENERAL_RESPONSE: &str = "I can help you understand this nutrition information, check diet compatibility, assess health goals, and provide personalized insights. What would you like to know?";

const DEFAULT_RULES: &[ResponseRule] = &[
    ResponseRule {
        intent: Intent::Simplify,
        triggers: &["simplify", "explain"],
        refinements: &[Refinement {
            keyword: "calories",
            response: "This nutrition label shows the caloric content and essential nutrients per serving. The calories indicate energy content, while other nutrients like protein, fats, and carbs provide building blocks for your body.",
        }],
        fallback: "This nutrition label provides key information about the nutritional content of this food item, including macronutrients and micronutrients per serving.",
    },
    ResponseRule {
        intent: Intent::HealthGoal,
        triggers: &["health goal", "weight loss"],
        refinements: &[
            Refinement {
                keyword: "weight loss",
                response: "For weight loss, focus on foods with moderate calories, high protein, and low added sugars. This food's nutritional profile should be evaluated against your daily calorie goals.",
            },
            Refinement {
                keyword: "muscle gain",
                response: "For muscle gain, prioritize foods high in protein and adequate calories. Look for lean protein sources and balanced macronutrients.",
            },
            Refinement {
                keyword: "heart health",
                response: "For heart health, choose foods low in sodium and saturated fats, with good fiber content. Monitor cholesterol intake.",
            },
            Refinement {
                keyword: "diabetes",
                response: "For diabetes management, focus on foods with low added sugars, high fiber, and complex carbohydrates to help manage blood sugar levels.",
            },
        ],
        fallback: "This food's suitability for your health goals depends on your specific nutritional needs and daily targets.",
    },
    ResponseRule {
        intent: Intent::Diet,
        triggers: &["diet", "keto", "vegan"],
        refinements: &[
            Refinement {
                keyword: "keto",
                response: "For keto diet compatibility, check that this food is very low in carbohydrates (under 10g net carbs) and high in healthy fats.",
            },
            Refinement {
                keyword: "vegan",
                response: "For vegan diet compatibility, ensure this food contains no animal products, including no cholesterol and no animal-derived ingredients.",
            },
            Refinement {
                keyword: "paleo",
                response: "For paleo diet compatibility, this food should be minimally processed and contain no grains, legumes, or added sugars.",
            },
        ],
        fallback: "Diet compatibility depends on the specific restrictions and guidelines of your chosen dietary approach.",
    },
    ResponseRule {
        intent: Intent::Question,
        triggers: &["?", "how", "what"],
        refinements: &[
            Refinement {
                keyword: "sodium",
                response: "Sodium content affects blood pressure and heart health. The recommended daily limit is 2,300mg for most adults.",
            },
            Refinement {
                keyword: "sugar",
                response: "Added sugars provide calories without essential nutrients. The daily limit is around 50g for most adults.",
            },
            Refinement {
                keyword: "protein",
                response: "Protein is essential for muscle maintenance and growth. Most adults need about 0.8g per kg of body weight daily.",
            },
            Refinement {
                keyword: "fat",
                response: "Fats provide essential fatty acids and fat-soluble vitamins. Focus on unsaturated fats and limit saturated fats.",
            },
        ],
        fallback: "I can help you understand any aspect of this nutrition information. Feel free to ask about specific nutrients or health implications.",
    },
    ResponseRule {
        intent: Intent::Warnings,
        triggers: &["warning", "alert"],
        refinements: &[],
        fallback: "Based on the nutrition analysis, I can identify potential health concerns and suggest healthier alternatives to support your wellness goals.",
    },
];

/// Ordered keyword rules mapping prompt text to a canned narrative
#[derive(Debug, Clone)]
pub struct ResponseComposer {
    rules: Vec<ResponseRule>,
    fallback: &'static str,
}

impl ResponseComposer {
    /// Composer with the standard advisory rule set
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec(), GENERAL_RESPONSE)
    }

    /// Composer with a custom rule list and catch-all sentence
    #[must_use]
    pub const fn with_rules(rules: Vec<ResponseRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Append a rule evaluated after all existing ones
    #[must_use]
    pub fn with_rule(mut self, rule: ResponseRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    fn first_match(&self, lowered: &str) -> Option<&ResponseRule> {
        self.rules.iter().find(|rule| rule.matches(lowered))
    }

    /// Intent of the first rule that fires for `prompt`
    #[must_use]
    pub fn classify(&self, prompt: &str) -> Intent {
        let lowered = prompt.to_lowercase();
        self.first_match(&lowered)
            .map_or(Intent::General, |rule| rule.intent)
    }

    /// Narrative sentence for `prompt`
    #[must_use]
    pub fn compose(&self, prompt: &str) -> &'static str {
        let lowered = prompt.to_lowercase();
        self.first_match(&lowered)
            .map_or(self.fallback, |rule| rule.respond(&lowered))
    }
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}
