// ABOUTME: HTTP server binary for the NutriLens nutrition advisory API
// ABOUTME: Loads environment configuration, applies CLI overrides, and serves the advisory routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! # NutriLens Server Binary
//!
//! Starts the advisory API. Configuration comes from the environment; the
//! flags below override individual values.

use anyhow::Result;
use clap::Parser;
use nutrilens::{config::ServerConfig, logging, resources::AdvisorResources, server};
use nutrilens_core::constants::{endpoints, service_names};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "nutrilens-server")]
#[command(about = "NutriLens - plain-language nutrition label advice over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Guideline table JSON file replacing the built-in table
    #[arg(long)]
    guidelines: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(path) = args.guidelines {
        config.knowledge.guidelines_path = Some(path);
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting {}", service_names::NUTRILENS_SERVER);
    info!("{}", config.summary());

    let resources = Arc::new(AdvisorResources::initialize(&config));
    if !resources.models_loaded() {
        warn!("Serving in degraded mode; readiness probe will report 503");
    }

    display_available_endpoints(&config);

    if let Err(e) = server::run(&config, resources).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("Monitoring:");
    info!("   Liveness:          GET  {base}{}", endpoints::HEALTH);
    info!("   Readiness:         GET  {base}{}", endpoints::READY);
    info!("Nutrition Advisory:");
    info!("   Simplify Label:    POST {base}{}", endpoints::SIMPLIFY);
    info!("   Health Goal:       POST {base}{}", endpoints::HEALTH_GOAL);
    info!("   Diet Check:        POST {base}{}", endpoints::DIET_COMPATIBILITY);
    info!("   Ask a Question:    POST {base}{}", endpoints::CHAT);
    info!("   Warnings:          POST {base}{}", endpoints::WARNINGS);
    info!("   Guideline Table:   GET  {base}{}", endpoints::GUIDELINES);
    info!("=== End of Endpoint List ===");
}
