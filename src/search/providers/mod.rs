// src/search/providers/mod.rs
pub mod fixture;
pub mod perplexity;

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::search::types::SearchProvider;

/// Factory: build a provider according to config and environment.
///
/// * If `NEWS_TEST_MODE=fixture`, returns the deterministic fixture provider
///   (no credential, no network).
/// * Otherwise builds the live Perplexity client.
pub fn build_provider(config: &AppConfig) -> Arc<dyn SearchProvider> {
    if std::env::var("NEWS_TEST_MODE")
        .map(|v| v == "fixture")
        .unwrap_or(false)
    {
        return Arc::new(fixture::FixtureProvider);
    }

    Arc::new(perplexity::PerplexityProvider::new(
        &config.perplexity_api_key,
        Duration::from_secs(config.request_timeout_secs),
    ))
}
