use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::search::types::{SearchProvider, TopicRequest, TopicResult};
use crate::search::Orchestrator;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn SearchProvider>,
}

pub fn create_router(state: AppState) -> Router {
    // Strict CORS for local development only.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost"),
            HeaderValue::from_static("http://127.0.0.1"),
        ]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(read_root))
        .route("/api/health", get(get_health))
        .route("/api/get_news", post(get_news))
        .fallback_service(ServeDir::new("public"))
        .layer(cors)
        .with_state(state)
}

async fn read_root() -> &'static str {
    "Hello World"
}

#[derive(serde::Serialize)]
struct Health {
    status: &'static str,
}

async fn get_health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[derive(serde::Serialize)]
struct ErrorBody {
    detail: String,
}

/// Fetch recent news for the requested topics. The response carries exactly
/// one entry per topic, in request order; per-topic provider failures show
/// up as empty item lists, never as a non-200 response.
async fn get_news(
    State(state): State<AppState>,
    Json(body): Json<TopicRequest>,
) -> Result<Json<Vec<TopicResult>>, (StatusCode, Json<ErrorBody>)> {
    if body.topics.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                detail: "at least one topic is required".to_string(),
            }),
        ));
    }

    let orchestrator = Orchestrator::new(Arc::clone(&state.provider), &state.config);
    let results = orchestrator.search_topics(&body.topics).await;

    info!(topics = body.topics.len(), "fetched news for all topics");
    Ok(Json(results))
}
