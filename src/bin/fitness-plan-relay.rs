// ABOUTME: Server binary for the fitness plan relay
// ABOUTME: Loads configuration, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitness Plan Relay Binary
//!
//! Reads configuration from the environment (and a `.env` file, when
//! present), refuses to start without a Gemini credential, and serves the
//! relay's HTTP API.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fitness_plan_relay::{
    config::ServerConfig, logging, resources::ServerResources, server,
};
use tracing::{error, info};

/// Command-line overrides for the listener address
#[derive(Parser)]
#[command(name = "fitness-plan-relay")]
#[command(about = "Fitness Plan Relay - turns a fitness profile into a Gemini-generated plan")]
#[command(version)]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Local development convenience; absence of a .env file is not an error
    dotenvy::dotenv().ok();

    logging::init_from_env()?;

    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start: {e}");
            return Err(e.into());
        }
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    info!(
        provider = resources.fitness_plan.provider_name(),
        "Plan provider initialized"
    );

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
