//! Card listing and bulk deletion.

use axum::extract::{Query, State};
use axum::Json;
use cardsmith_db::models::card::Card;
use cardsmith_db::repositories::CardRepo;
use cardsmith_pipeline::CardStore;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CardListResponse {
    pub cards: Vec<Card>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Serialize)]
pub struct ClearDatabaseResponse {
    pub message: String,
    pub deleted: u64,
}

/// GET /api/cards -- one page of cards, newest first.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<CardListResponse>> {
    let (page, per_page) = params.resolve();
    let (cards, total) = CardRepo::list_page(&state.pool, page, per_page).await?;

    // Ceiling division; an empty table still reports one (empty) page.
    let pages = ((total + per_page - 1) / per_page).max(1);

    Ok(Json(CardListResponse {
        cards,
        total,
        pages,
        current_page: page,
    }))
}

/// POST /api/clear_database -- delete every card.
pub async fn clear_database(
    State(state): State<AppState>,
) -> AppResult<Json<ClearDatabaseResponse>> {
    let deleted = state.store.delete_all().await?;
    tracing::info!(deleted, "Cleared cards table");

    Ok(Json(ClearDatabaseResponse {
        message: "Database cleared".to_string(),
        deleted,
    }))
}
