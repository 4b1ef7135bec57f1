// ABOUTME: Main library entry point for the NutriLens nutrition advisory service
// ABOUTME: Wires configuration, resources, advisory service, and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![deny(unsafe_code)]

//! # NutriLens
//!
//! An HTTP/JSON service that turns a food's nutrition facts into plain-language
//! advice: a simplified summary, suitability for a health goal, compatibility
//! with a diet, answers to free-form questions, and health warnings.
//!
//! Every answer is deterministic. Scores come from fixed rule tables in
//! `nutrilens-intelligence`, narrative text comes from a keyword-driven
//! response composer, and supporting facts come from a small keyword index
//! over the active guideline table.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven server configuration
//! - **Resources**: guideline table, knowledge index, scoring engine and text
//!   generator, built once at startup
//! - **Service**: the five advisory operations, independent of HTTP
//! - **Routes**: axum handlers and the shared JSON extractor
//! - **Server**: router assembly, middleware stack, graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilens::config::ServerConfig;
//! use nutrilens::resources::AdvisorResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(AdvisorResources::initialize(&config));
//!     nutrilens::server::run(&config, resources).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Liveness and readiness reporting
pub mod health;

/// Text generation behind a swappable trait
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware for request ids, tracing, and CORS
pub mod middleware;

/// Shared engine resources built at startup
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Advisory operations independent of transport
pub mod service;
