//! WhatsNew — Binary Entrypoint
//! Boots the Axum HTTP server: config, startup credential probe, routes,
//! shared state, and middleware.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use whatsnew::api::{self, AppState};
use whatsnew::config::AppConfig;
use whatsnew::search::providers::build_provider;
use whatsnew::startup;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("whatsnew=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    // Built exactly once, then injected everywhere; no hidden global.
    let config = AppConfig::load()?;
    let provider = build_provider(&config);

    // The fixture provider has no credential to validate; live keys get
    // probed before we accept traffic.
    if provider.name() != "fixture" {
        startup::validate_api_key(&config.perplexity_api_key).await?;
    }

    let addr = config.bind_addr.clone();
    let state = AppState {
        config: Arc::new(config),
        provider,
    };
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
