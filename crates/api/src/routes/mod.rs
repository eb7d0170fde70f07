pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate_card                       generate one card (POST)
/// /open_pack                           generate a booster pack (POST)
/// /cards                               paginated listing (GET)
/// /clear_database                      delete all cards (POST)
///
/// /image_gen/generate_image            dispatch artwork job (POST)
/// /image_gen/request_status/{id}       poll artwork job (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/generate_card", post(handlers::generation::generate_card))
        .route("/open_pack", post(handlers::generation::open_pack))
        .route("/cards", get(handlers::cards::list_cards))
        .route("/clear_database", post(handlers::cards::clear_database))
        .route(
            "/image_gen/generate_image",
            post(handlers::images::generate_image),
        )
        .route(
            "/image_gen/request_status/{request_id}",
            get(handlers::images::request_status),
        )
}
