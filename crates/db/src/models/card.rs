//! Card entity model and insert DTO.

use cardsmith_core::card::CardData;
use cardsmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Artwork generation status values stored on a card.
pub mod image_status {
    pub const IN_PROGRESS: &str = "IN_PROGRESS";
    pub const COMPLETED: &str = "COMPLETED";
    pub const FAILED: &str = "FAILED";
}

/// A row from the `cards` table.
///
/// Rows are immutable after insert except the artwork fields
/// (`image_url`, `image_request_id`, `image_status`), which an
/// asynchronous image job may update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub name: String,
    pub mana_cost: String,
    pub card_type: String,
    pub color: String,
    pub abilities: String,
    pub power_toughness: Option<String>,
    pub flavor_text: String,
    pub rarity: String,
    pub image_url: Option<String>,
    pub set_name: String,
    pub card_number: i32,
    pub image_request_id: Option<Uuid>,
    pub image_status: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCard {
    pub name: String,
    pub mana_cost: String,
    pub card_type: String,
    pub color: String,
    pub abilities: String,
    pub power_toughness: Option<String>,
    pub flavor_text: String,
    pub rarity: String,
    pub image_url: Option<String>,
    pub set_name: String,
    pub card_number: i32,
}

impl CreateCard {
    /// Combine a generated draft with its allocated (set label, number).
    pub fn from_draft(draft: CardData, set_name: String, card_number: i32) -> Self {
        CreateCard {
            name: draft.name,
            mana_cost: draft.mana_cost,
            card_type: draft.card_type,
            color: draft.color,
            abilities: draft.abilities,
            power_toughness: draft.power_toughness,
            flavor_text: draft.flavor_text,
            rarity: draft.rarity.to_string(),
            image_url: None,
            set_name,
            card_number,
        }
    }
}
