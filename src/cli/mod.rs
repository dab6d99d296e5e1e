//! CLI module for the auth cache
//!
//! Maintenance commands against the durable native store. Every command goes
//! through the scoped adapter, so keys outside the auth namespace are never
//! listed or cleared.

pub mod cache;
pub mod status;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Inspect and maintain the authentication token cache
#[derive(Parser)]
#[command(name = "auth-cache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Cache(cache::CacheCommand),

    /// Show platform detection, redirect URI and cache selection
    Status,
}

/// Loads `.env` and configuration, then installs logging
pub fn init() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Falling back to default configuration: {}", e);
        AppConfig::default()
    });
    logging::init_logging(&config.logging);

    config
}
