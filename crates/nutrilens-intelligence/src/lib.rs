// ABOUTME: Deterministic nutrition advisory engine for NutriLens
// ABOUTME: Guideline table, knowledge lookup, scoring rules, and canned response composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![deny(unsafe_code)]

//! # NutriLens Intelligence
//!
//! Everything here is a pure function of the guideline table and the caller's
//! label. No module performs I/O except [`GuidelineTable::load`].
//!
//! - **guidelines**: daily values, health-goal and diet descriptors
//! - **knowledge**: fact sentences and keyword retrieval
//! - **scoring**: 0-100 scores, warnings, suggestions, concerns
//! - **composer**: ordered keyword rules producing narrative text

/// Reference daily values and goal/diet descriptors
pub mod guidelines;

/// Fact sentences with substring retrieval
pub mod knowledge;

/// Threshold-based scoring rules
pub mod scoring;

/// Keyword rule chain for narrative responses
pub mod composer;

pub use composer::{Intent, ResponseComposer, ResponseRule};
pub use guidelines::{GuidelineError, GuidelineProfile, GuidelineTable, NamedProfile};
pub use knowledge::KnowledgeIndex;
pub use scoring::{is_compatible, recommendation, DietType, HealthGoal, ScoringEngine};
