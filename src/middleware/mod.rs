// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, request spans, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

/// CORS configuration
pub mod cors;
/// Request ids and request spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{create_request_span, request_id_header, MakeRequestUuid};
