use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::llm::LlmConfig;
use crate::services::llm::{ChatCompletion, GenerationParams, LlmClient, LlmError};

pub mod config;
pub mod error;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<dyn ChatCompletion>,
    pub params: GenerationParams,
}

impl AppState {
    pub fn new(chat: Arc<dyn ChatCompletion>, params: GenerationParams) -> Self {
        Self { chat, params }
    }

    /// State backed by the real chat completion API.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = LlmClient::new(config)?;
        Ok(Self::new(Arc::new(client), GenerationParams::from(config)))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(modules::product::routes::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
