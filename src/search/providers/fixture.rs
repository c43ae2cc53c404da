// src/search/providers/fixture.rs
//! Deterministic provider for tests and local runs without an API key.
//! Activated via `NEWS_TEST_MODE=fixture` (see `providers::build_provider`).

use anyhow::Result;
use async_trait::async_trait;

use crate::search::types::SearchProvider;

/// Answers every query with canned, well-formed structured content derived
/// from the topic, so the primary extraction path is exercised end to end.
pub struct FixtureProvider;

#[async_trait]
impl SearchProvider for FixtureProvider {
    async fn fetch_content(&self, topic: &str, _query: &str) -> Result<String> {
        let slug: String = topic
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Ok(format!(
            "TITLE: {topic} headline one\n\
             SNIPPET: First canned summary for {topic}.\n\
             URL: https://news.example/{slug}/1\n\
             TITLE: {topic} headline two\n\
             SNIPPET: Second canned summary for {topic}.\n\
             URL: https://news.example/{slug}/2\n"
        ))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
