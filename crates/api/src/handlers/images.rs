//! Artwork serving and asynchronous artwork regeneration.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use cardsmith_core::naming::validate_image_filename;
use cardsmith_core::types::DbId;
use cardsmith_db::models::card::{image_status, Card, CreateCard};
use cardsmith_db::repositories::CardRepo;
use cardsmith_openai::OpenAiGenerator;
use cardsmith_pipeline::CardPipeline;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::background::{ImageJobState, ImageJobTracker};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /card_image/{filename} -- serve stored artwork bytes.
pub async fn card_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_image_filename(&filename)?;

    let path = state.config.image_dir.join(&filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("image '{filename}' not found")))?;

    let content_type = match filename.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    };

    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}

#[derive(Deserialize)]
pub struct GenerateImageRequest {
    pub card_id: DbId,
}

#[derive(Serialize)]
pub struct ImageRequestStatus {
    pub request_id: Uuid,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/image_gen/generate_image -- regenerate artwork for an
/// existing card in the background. Responds immediately with a request
/// id the client polls via `request_status`.
pub async fn generate_image(
    State(state): State<AppState>,
    Json(body): Json<GenerateImageRequest>,
) -> AppResult<(StatusCode, Json<ImageRequestStatus>)> {
    let card = CardRepo::find_by_id(&state.pool, body.card_id)
        .await?
        .ok_or(AppError::Core(cardsmith_core::error::CoreError::NotFound {
            entity: "card",
            id: body.card_id,
        }))?;

    let request_id = Uuid::new_v4();
    CardRepo::mark_image_in_progress(&state.pool, card.id, request_id).await?;
    state.image_jobs.start(request_id);

    tokio::spawn(run_artwork_job(
        Arc::clone(&state.pipeline),
        state.pool.clone(),
        Arc::clone(&state.image_jobs),
        card,
        request_id,
    ));

    tracing::info!(card_id = body.card_id, %request_id, "Dispatched artwork job");

    Ok((
        StatusCode::ACCEPTED,
        Json(ImageRequestStatus {
            request_id,
            status: image_status::IN_PROGRESS.to_string(),
            image_url: None,
            error: None,
        }),
    ))
}

/// GET /api/image_gen/request_status/{request_id} -- poll an artwork job.
///
/// The in-memory tracker answers first; terminal results are consumed as
/// they are returned, and later polls (or polls after a restart) fall
/// through to the card row.
pub async fn request_status(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> AppResult<Json<ImageRequestStatus>> {
    if let Some(job) = state.image_jobs.poll(request_id) {
        let status = match job {
            ImageJobState::InProgress => ImageRequestStatus {
                request_id,
                status: image_status::IN_PROGRESS.to_string(),
                image_url: None,
                error: None,
            },
            ImageJobState::Completed { image_url } => ImageRequestStatus {
                request_id,
                status: image_status::COMPLETED.to_string(),
                image_url: Some(image_url),
                error: None,
            },
            ImageJobState::Failed { error } => ImageRequestStatus {
                request_id,
                status: image_status::FAILED.to_string(),
                image_url: None,
                error: Some(error),
            },
        };
        return Ok(Json(status));
    }

    let card = CardRepo::find_by_image_request(&state.pool, request_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("unknown image request {request_id}")))?;

    Ok(Json(ImageRequestStatus {
        request_id,
        status: card
            .image_status
            .unwrap_or_else(|| image_status::IN_PROGRESS.to_string()),
        image_url: card.image_url,
        error: None,
    }))
}

/// The detached artwork job: generate, persist the outcome, notify the
/// tracker. Never propagates errors; every exit records a terminal state.
async fn run_artwork_job(
    pipeline: Arc<CardPipeline<OpenAiGenerator>>,
    pool: cardsmith_db::DbPool,
    tracker: Arc<ImageJobTracker>,
    card: Card,
    request_id: Uuid,
) {
    let draft = CreateCard {
        name: card.name,
        mana_cost: card.mana_cost,
        card_type: card.card_type,
        color: card.color,
        abilities: card.abilities,
        power_toughness: card.power_toughness,
        flavor_text: card.flavor_text,
        rarity: card.rarity,
        image_url: card.image_url,
        set_name: card.set_name,
        card_number: card.card_number,
    };

    let (state, image_url, status) = match pipeline.try_generate_artwork(&draft).await {
        Ok(filename) => (
            ImageJobState::Completed {
                image_url: filename.clone(),
            },
            Some(filename),
            image_status::COMPLETED,
        ),
        Err(error) => {
            tracing::error!(%error, card_id = card.id, %request_id, "Artwork job failed");
            (
                ImageJobState::Failed {
                    error: error.to_string(),
                },
                None,
                image_status::FAILED,
            )
        }
    };

    if let Err(error) =
        CardRepo::update_artwork(&pool, card.id, image_url.as_deref(), status).await
    {
        tracing::warn!(%error, card_id = card.id, "Failed to persist artwork outcome");
    }

    tracker.finish(request_id, state);
}
