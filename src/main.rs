mod config;
mod cricket;
mod summary;
mod webhook;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::cricket::CricketClient;
use crate::webhook::WebhookClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cricbot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    info!("Configuration loaded successfully");
    info!("  Cricket API: {}", config.cricket.base_url);
    info!("  Webhook user: {}", config.webhook.username);

    let cricket = CricketClient::new(config.cricket.clone());
    let webhook = WebhookClient::new(config.webhook.clone());

    // One fetch, one notify, then exit. Scheduling is the caller's job.
    let message = match cricket.fetch_matches().await {
        Ok(matches) => summary::live_summary(&matches, Local::now()),
        Err(e) => {
            error!("Failed to fetch cricket scores: {:#}", e);
            None
        }
    };

    let content = match message {
        Some(message) => message,
        None => summary::fallback_message(Local::now()),
    };

    // A webhook failure is reported but never changes the exit code.
    match webhook.send(&content).await {
        Ok(()) => info!("Message sent to webhook successfully"),
        Err(e) => error!("Failed to send message to webhook: {:#}", e),
    }

    Ok(())
}
