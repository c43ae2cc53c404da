// src/search/mod.rs
//! Search orchestrator: one provider call per requested topic, fanned out as
//! independent tasks and joined back in request order. A slow or failed call
//! degrades to an empty item list for its own topic only.

pub mod providers;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::{AppConfig, RecencyWindow};
use crate::extract;
use crate::search::types::{NewsItem, SearchProvider, TopicResult};

/// Fixed instruction sent with every provider call; mandates the three-field
/// per-item shape the extractor looks for.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that extracts recent news. \
     Return results in a structured format: each news item on a new line with \
     TITLE: <title>, SNIPPET: <snippet>, URL: <url>";

/// Natural-language query for one topic.
pub fn build_query(topic: &str, max_results: usize, window: RecencyWindow) -> String {
    format!(
        "Latest news about {topic} in the past {}. \
         Provide up to {max_results} news items with title, brief summary, and source URL.",
        window.query_text()
    )
}

pub struct Orchestrator {
    provider: Arc<dyn SearchProvider>,
    max_results: usize,
    window: RecencyWindow,
    call_timeout: Duration,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn SearchProvider>, config: &AppConfig) -> Self {
        Self {
            provider,
            max_results: config.max_results,
            window: config.recency_window,
            call_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// One `TopicResult` per requested topic, in request order.
    ///
    /// Per-topic calls run concurrently, each under its own timeout.
    /// Completions land in a pre-sized slot vector by index, so completion
    /// order never affects output order. No topic's failure touches its
    /// siblings, and no call is retried.
    pub async fn search_topics(&self, topics: &[String]) -> Vec<TopicResult> {
        let mut slots: Vec<Option<Vec<NewsItem>>> = vec![None; topics.len()];
        let mut tasks = JoinSet::new();

        for (idx, topic) in topics.iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let topic = topic.clone();
            let query = build_query(&topic, self.max_results, self.window);
            let max_results = self.max_results;
            let timeout = self.call_timeout;
            tasks.spawn(async move {
                let items =
                    fetch_topic(provider.as_ref(), &topic, &query, max_results, timeout).await;
                (idx, items)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((idx, items)) => slots[idx] = Some(items),
                // Panicked task: its slot stays None and resolves to empty.
                Err(e) => warn!(error = %e, "search task failed to join"),
            }
        }

        topics
            .iter()
            .zip(slots)
            .map(|(topic, slot)| TopicResult {
                topic: topic.clone(),
                items: slot.unwrap_or_default(),
            })
            .collect()
    }
}

/// Fetch and extract items for a single topic. All failure modes (timeout,
/// transport error, non-success status) collapse to an empty list here; the
/// credential never appears in these logs.
async fn fetch_topic(
    provider: &dyn SearchProvider,
    topic: &str,
    query: &str,
    max_results: usize,
    timeout: Duration,
) -> Vec<NewsItem> {
    match tokio::time::timeout(timeout, provider.fetch_content(topic, query)).await {
        Ok(Ok(content)) => {
            let items = extract::extract_news_items(&content, topic, max_results);
            info!(
                topic,
                provider = provider.name(),
                count = items.len(),
                "fetched news items"
            );
            items
        }
        Ok(Err(e)) => {
            error!(topic, provider = provider.name(), error = %e, "provider call failed");
            Vec::new()
        }
        Err(_) => {
            error!(
                topic,
                provider = provider.name(),
                timeout_secs = timeout.as_secs(),
                "provider call timed out"
            );
            Vec::new()
        }
    }
}
