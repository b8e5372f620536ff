//! Haven Hotel
//!
//! Public catalog, reservation wizard and admin back-office.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use haven_client::HavenConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may be set directly
    let _ = dotenvy::dotenv();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = HavenConfig::from_env().context("invalid configuration")?;
    tracing::info!(api = %config.api_base_url, "configuration loaded");

    // Launch the Dioxus desktop application
    haven_ui::launch(&config)
}
