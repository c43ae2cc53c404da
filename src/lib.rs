// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod extract;
pub mod search;
pub mod startup;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::search::types::{NewsItem, TopicRequest, TopicResult};
