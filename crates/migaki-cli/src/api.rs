//! Migaki API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for Migaki
pub struct MigakiClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct PolishRequest<'a> {
    pub draft: &'a str,
    pub tone: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PolishResponse {
    pub email: String,
    pub model: String,
    #[serde(default)]
    pub usage: TokenUsage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl MigakiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Polish a draft into a professional email
    pub async fn polish(&self, draft: &str, tone: &str) -> Result<PolishResponse> {
        let url = format!("{}/migaki/polish", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&PolishRequest { draft, tone })
            .send()
            .await
            .context("Failed to connect to Migaki API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let polished: PolishResponse = resp.json().await.context("Failed to parse response")?;

        Ok(polished)
    }
}
