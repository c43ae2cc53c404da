// src/search/providers/perplexity.rs
//! Live Perplexity client (Chat Completions API).

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::search::types::SearchProvider;
use crate::search::SYSTEM_INSTRUCTION;

pub const API_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "sonar";

pub struct PerplexityProvider {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl PerplexityProvider {
    pub fn new(api_key: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("whatsnew/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        Self {
            http,
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl SearchProvider for PerplexityProvider {
    async fn fetch_content(&self, _topic: &str, query: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
        }
        // Every level defaults, so a response missing choices/message/content
        // decodes to empty content instead of an error. Empty content flows
        // into the extractor's fallback path and yields zero items.
        #[derive(Deserialize, Default)]
        struct Resp {
            #[serde(default)]
            choices: Vec<Choice>,
        }
        #[derive(Deserialize, Default)]
        struct Choice {
            #[serde(default)]
            message: ChoiceMsg,
        }
        #[derive(Deserialize, Default)]
        struct ChoiceMsg {
            #[serde(default)]
            content: String,
        }

        let req = Req {
            model: &self.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                Msg {
                    role: "user",
                    content: query,
                },
            ],
        };

        let resp = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("provider returned status {status}");
        }

        let body: Resp = resp.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "perplexity"
    }
}
