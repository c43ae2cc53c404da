// src/search/types.rs
use anyhow::Result;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,   // article headline
    pub snippet: String, // summary or excerpt
    pub url: String,     // full link to the article
    pub topic: String,   // topic this item was fetched for
}

/// News items for a single requested topic, in extraction order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TopicResult {
    pub topic: String,
    pub items: Vec<NewsItem>,
}

/// Request payload: one or more topics to query.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TopicRequest {
    pub topics: Vec<String>,
}

/// Seam between the orchestrator and the conversational search backend.
/// Implementations submit one generated query and hand back the raw
/// free-text answer; parsing is the extractor's job, not theirs.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn fetch_content(&self, topic: &str, query: &str) -> Result<String>;
    fn name(&self) -> &'static str;
}
