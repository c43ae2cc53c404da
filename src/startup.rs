// src/startup.rs
//! Startup validation: a minimal provider call proving the configured API
//! key is usable before the server accepts traffic.

use std::time::Duration;

use anyhow::{bail, Context};
use serde_json::json;
use tracing::{error, info};

use crate::search::providers::perplexity::{API_URL, DEFAULT_MODEL};

const VALIDATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Send a minimal chat-completions request with the configured key.
/// Unauthorized (401) and transport failures are fatal; the key itself is
/// never logged, only its length.
pub async fn validate_api_key(api_key: &str) -> anyhow::Result<()> {
    let http = reqwest::Client::builder()
        .timeout(VALIDATION_TIMEOUT)
        .build()
        .context("build validation client")?;

    let payload = json!({
        "model": DEFAULT_MODEL,
        "messages": [{ "role": "user", "content": "Hello" }],
    });

    info!(key_len = api_key.len(), "validating Perplexity API key");
    let resp = match http
        .post(API_URL)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) if e.is_timeout() => {
            error!(
                timeout_secs = VALIDATION_TIMEOUT.as_secs(),
                "API key validation timed out"
            );
            bail!(
                "Perplexity API validation timed out after {}s",
                VALIDATION_TIMEOUT.as_secs()
            );
        }
        Err(e) => {
            error!(error = %e, "API key validation request failed");
            bail!("Perplexity API validation request failed");
        }
    };

    match resp.status() {
        s if s.is_success() => {
            info!("Perplexity API key validation succeeded");
            Ok(())
        }
        reqwest::StatusCode::UNAUTHORIZED => {
            error!("API key validation failed: unauthorized (401)");
            bail!("Invalid Perplexity API key. Please check config/local_settings.json");
        }
        s => {
            let detail: String = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect();
            error!(status = %s, %detail, "API key validation failed");
            bail!("Perplexity API validation failed with status {s}");
        }
    }
}
