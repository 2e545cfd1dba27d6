pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod search;

mod http_client;

#[cfg(test)]
mod testing;

use std::sync::Arc;
use pipeline::InsightPipeline;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<InsightPipeline>,
}
