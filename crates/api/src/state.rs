use std::sync::Arc;

use cardsmith_openai::OpenAiGenerator;
use cardsmith_pipeline::{CardPipeline, PgCardStore};

use crate::background::ImageJobTracker;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cardsmith_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Card generation pipeline (text, artwork, numbering).
    pub pipeline: Arc<CardPipeline<OpenAiGenerator>>,
    /// Card persistence gateway.
    pub store: Arc<PgCardStore>,
    /// In-flight artwork job tracker.
    pub image_jobs: Arc<ImageJobTracker>,
}
