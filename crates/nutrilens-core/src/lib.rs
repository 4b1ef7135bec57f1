// ABOUTME: Core types and constants for the NutriLens advisory service
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![deny(unsafe_code)]

//! # NutriLens Core
//!
//! Foundation crate providing shared types and constants for the NutriLens
//! nutrition advisory service. It changes rarely, which keeps incremental
//! builds of the engine and server crates fast.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: The nutrition-facts label and the daily-value nutrient set
//! - **constants**: Service names, endpoints, and advisory defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`NutritionRecord`, `Nutrient`)
pub mod models;
