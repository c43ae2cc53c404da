// src/config.rs
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

pub const DEFAULT_CONFIG_PATH: &str = "config/local_settings.json";

fn default_max_results() -> usize {
    5
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

/// How far back the generated query asks the provider to look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecencyWindow {
    #[default]
    Day,
    Week,
}

impl RecencyWindow {
    /// Wording spliced into the natural-language query.
    pub fn query_text(self) -> &'static str {
        match self {
            RecencyWindow::Day => "24 hours",
            RecencyWindow::Week => "7 days",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// "ENV" means: read from PERPLEXITY_API_KEY
    #[serde(rename = "perplexityApiKey")]
    pub perplexity_api_key: String,
    /// Per-topic item cap.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub recency_window: RecencyWindow,
    /// Per-call provider timeout, seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl AppConfig {
    /// Load from the default `config/local_settings.json` location.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Configuration file not found: {}: {e}. \
                 Copy config/local_settings.json.example and fill in your API key.",
                path.display()
            )
        })?;
        let mut cfg: AppConfig = serde_json::from_str(&data)
            .map_err(|e| anyhow::anyhow!("Invalid config in {}: {e}", path.display()))?;

        // Resolve api key if "ENV"
        if cfg.perplexity_api_key.trim().eq_ignore_ascii_case("env") {
            cfg.perplexity_api_key = env::var("PERPLEXITY_API_KEY")
                .map_err(|_| anyhow::anyhow!("Missing PERPLEXITY_API_KEY env var"))?;
        }
        if cfg.perplexity_api_key.trim().is_empty() {
            anyhow::bail!("perplexityApiKey must be non-empty");
        }

        // Sanitize out-of-range values back to defaults
        if cfg.max_results == 0 {
            cfg.max_results = default_max_results();
        }
        if cfg.request_timeout_secs == 0 {
            cfg.request_timeout_secs = default_request_timeout_secs();
        }

        Ok(cfg)
    }
}
