// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Configuration module
//!
//! Configuration is environment-only; command-line flags on the server binary
//! override individual fields after loading.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, Environment, HttpConfig, KnowledgeConfig, LogLevel, ServerConfig,
};
