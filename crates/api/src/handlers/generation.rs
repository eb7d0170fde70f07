//! Card and pack generation endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cardsmith_db::models::card::Card;
use cardsmith_pipeline::CardStore;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/generate_card -- generate one card, artwork included, and
/// persist it. Generation itself cannot fail (it degrades to fallbacks);
/// only persistence errors surface.
pub async fn generate_card(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Card>)> {
    let mut card = state.pipeline.generate_card(state.store.as_ref(), None).await?;
    card.image_url = Some(state.pipeline.generate_artwork(&card).await);

    let stored = state.store.insert(&card).await?;
    tracing::info!(
        id = stored.id,
        set_name = %stored.set_name,
        card_number = stored.card_number,
        "Generated card"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// POST /api/open_pack -- generate a ten-card booster pack and persist it
/// in one transaction. A failed insert aborts the whole pack.
pub async fn open_pack(State(state): State<AppState>) -> AppResult<(StatusCode, Json<Vec<Card>>)> {
    let pack = state.pipeline.open_pack(state.store.as_ref()).await?;
    let stored = state.store.insert_all(&pack).await?;
    tracing::info!(cards = stored.len(), "Opened pack");

    Ok((StatusCode::CREATED, Json(stored)))
}
