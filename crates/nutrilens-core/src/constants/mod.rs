// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identity, API paths, and advisory defaults shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat namespace.

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP advisory server
    pub const NUTRILENS_SERVER: &str = "nutrilens-server";
    /// Name of the offline command-line client
    pub const NUTRILENS_CLI: &str = "nutrilens-cli";
}

/// API endpoints
pub mod endpoints {
    /// Liveness endpoint
    pub const HEALTH: &str = "/api/health";
    /// Readiness endpoint
    pub const READY: &str = "/api/ready";
    /// Label simplification
    pub const SIMPLIFY: &str = "/api/nutrition/simplify";
    /// Health-goal suitability
    pub const HEALTH_GOAL: &str = "/api/nutrition/health-goal";
    /// Diet compatibility
    pub const DIET_COMPATIBILITY: &str = "/api/nutrition/diet-compatibility";
    /// Conversational Q&A
    pub const CHAT: &str = "/api/nutrition/chat";
    /// Warnings and suggestions
    pub const WARNINGS: &str = "/api/nutrition/warnings";
    /// Active guideline table
    pub const GUIDELINES: &str = "/api/nutrition/guidelines";
}

/// Network defaults
pub mod network {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8001;
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum request body size in bytes
    pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
    /// Header carrying the request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Advisory engine defaults
pub mod advisory {
    /// Number of knowledge sentences retrieved per request
    pub const DEFAULT_KNOWLEDGE_TOP_K: usize = 3;
    /// Number of retrieved facts echoed back by the chat endpoint
    pub const CHAT_RELEVANT_FACTS: usize = 2;
    /// Starting score of every scoring rule set
    pub const BASE_SCORE: i32 = 50;
    /// Minimum diet compatibility score considered compatible
    pub const COMPATIBILITY_THRESHOLD: u8 = 70;
}

/// Environment variable names
pub mod env_vars {
    /// Bind host
    pub const HOST: &str = "HOST";
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Maximum request body size
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
    /// Knowledge retrieval depth
    pub const KNOWLEDGE_TOP_K: &str = "KNOWLEDGE_TOP_K";
    /// Optional JSON file replacing the built-in guideline table
    pub const NUTRITION_GUIDELINES_PATH: &str = "NUTRITION_GUIDELINES_PATH";
}
