use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::config::WebhookConfig;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    username: &'a str,
    avatar_url: &'a str,
    content: &'a str,
}

pub struct WebhookClient {
    client: reqwest::Client,
    config: WebhookConfig,
}

impl WebhookClient {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            config,
        }
    }

    /// Post one message to the webhook. A non-2xx response is an error; the
    /// caller decides whether that is fatal.
    pub async fn send(&self, content: &str) -> Result<()> {
        let payload = WebhookPayload {
            username: &self.config.username,
            avatar_url: &self.config.avatar_url,
            content,
        };

        debug!("Posting {} chars to webhook", content.len());

        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .context("Failed to send webhook request")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Webhook error ({}): {}", status, error_body);
        }

        Ok(())
    }
}
