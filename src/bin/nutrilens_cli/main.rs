// ABOUTME: NutriLens CLI - runs advisory operations offline against a nutrition JSON file
// ABOUTME: Shares the AdvisoryService code path with the HTTP handlers and prints response JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens
//!
//! Usage:
//! ```bash
//! # Plain-language summary with daily value percentages
//! nutrilens-cli simplify --file label.json
//!
//! # Suitability for a health goal
//! nutrilens-cli goal weight_loss --file label.json
//!
//! # Diet compatibility
//! nutrilens-cli diet keto --file label.json
//!
//! # Free-form question with optional context
//! nutrilens-cli ask "is this high in sugar?" --context "afternoon snack" --file label.json
//!
//! # Health warnings and alternatives, using a custom guideline table
//! nutrilens-cli warnings --file label.json --guidelines guidelines.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrilens::config::{LogLevel, ServerConfig};
use nutrilens::resources::AdvisorResources;
use nutrilens::service::AdvisoryService;
use nutrilens_core::constants::service_names;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrilens-cli",
    about = "NutriLens offline advisory CLI",
    long_about = "Run NutriLens advisory operations against a nutrition facts JSON file without starting the server."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Nutrition facts JSON file
    #[arg(long, short = 'f', global = true, default_value = "nutrition.json")]
    file: PathBuf,

    /// Guideline table JSON file replacing the built-in table
    #[arg(long, global = true)]
    guidelines: Option<PathBuf>,

    /// Number of knowledge facts retrieved per request
    #[arg(long, global = true)]
    top_k: Option<usize>,

    /// Emit compact JSON instead of pretty-printed output
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Simplify a nutrition label into plain language
    Simplify,

    /// Score the food against a health goal
    Goal {
        /// Health goal id (e.g. `weight_loss`, `heart_health`)
        health_goal: String,
    },

    /// Check the food against a diet
    Diet {
        /// Diet id (e.g. `keto`, `vegan`, `low_sodium`)
        diet_type: String,
    },

    /// Ask a question about the food
    Ask {
        /// The question
        question: String,

        /// Extra context for the question
        #[arg(long)]
        context: Option<String>,
    },

    /// Health warnings, alternatives, and improvement tips
    Warnings,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level.to_tracing_level())
        .with_writer(io::stderr)
        .init();

    debug!("{} reading {}", service_names::NUTRILENS_CLI, cli.file.display());

    let mut config = ServerConfig::default();
    config.knowledge.guidelines_path = cli.guidelines;
    if let Some(top_k) = cli.top_k {
        config.knowledge.top_k = top_k;
    }
    config.validate()?;

    let service = AdvisoryService::new(Arc::new(AdvisorResources::initialize(&config)));
    let record = helpers::input::load_record(&cli.file)?;

    let output = match cli.command {
        Command::Simplify => commands::advise::simplify(&service, record).await?,
        Command::Goal { health_goal } => {
            commands::advise::health_goal(&service, record, health_goal).await?
        }
        Command::Diet { diet_type } => {
            commands::advise::diet(&service, record, diet_type).await?
        }
        Command::Ask { question, context } => {
            commands::advise::ask(&service, record, question, context).await?
        }
        Command::Warnings => commands::advise::warnings(&service, record).await?,
    };

    helpers::display::print_json(&output, cli.compact)
}
