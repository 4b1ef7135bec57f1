// ABOUTME: Service health and readiness reporting for operational visibility
// ABOUTME: Derives liveness and readiness payloads from the advisor resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Health and readiness reporting

use crate::resources::AdvisorResources;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Overall service status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Process is up and answering
    Healthy,
    /// Fully initialised and ready for traffic
    Ready,
    /// Serving with reduced capability
    Degraded,
}

/// Liveness payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process answers
    pub status: HealthStatus,
    /// Whether the advisory engine initialised fully
    pub models_loaded: bool,
}

/// Readiness payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// `ready` or `degraded`
    pub status: HealthStatus,
    /// Whether the advisory engine initialised fully
    pub models_loaded: bool,
    /// Number of indexed knowledge sentences
    pub knowledge_facts: usize,
    /// Time the engine was built (RFC 3339)
    pub started_at: String,
    /// Response timestamp (RFC 3339)
    pub timestamp: String,
}

impl ReadinessResponse {
    /// True when the service should receive traffic
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == HealthStatus::Ready
    }
}

/// Builds health payloads from shared resources
pub struct HealthChecker;

impl HealthChecker {
    /// Liveness: the process is serving
    #[must_use]
    pub const fn health(resources: &AdvisorResources) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Healthy,
            models_loaded: resources.models_loaded(),
        }
    }

    /// Readiness: the engine initialised without degradation
    #[must_use]
    pub fn readiness(resources: &AdvisorResources) -> ReadinessResponse {
        let models_loaded = resources.models_loaded();
        ReadinessResponse {
            status: if models_loaded {
                HealthStatus::Ready
            } else {
                HealthStatus::Degraded
            },
            models_loaded,
            knowledge_facts: resources.knowledge().len(),
            started_at: resources.started_at().to_rfc3339(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
