//! The typed card draft extracted from a normalized field map.

use serde_json::{Map, Value};

use crate::normalize::{clean_mana_cost, default_for_field};
use crate::rarity::Rarity;

/// Semantic card fields, before a set label and card number are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub name: String,
    pub mana_cost: String,
    pub card_type: String,
    pub color: String,
    pub abilities: String,
    pub power_toughness: Option<String>,
    pub flavor_text: String,
    pub rarity: Rarity,
}

impl CardData {
    /// Build a draft from a map produced by [`crate::normalize::normalize`].
    ///
    /// The normalizer guarantees the required keys exist, so this never
    /// fails; an unrecognized rarity string degrades to Common.
    pub fn from_normalized(data: &Map<String, Value>) -> Self {
        let rarity = field(data, "rarity")
            .parse::<Rarity>()
            .unwrap_or(Rarity::Common);

        let power_toughness = data
            .get("powerToughness")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("null"))
            .map(str::to_string);

        CardData {
            name: field(data, "name"),
            mana_cost: clean_mana_cost(&field(data, "manaCost")),
            card_type: field(data, "type"),
            color: field(data, "color"),
            abilities: field(data, "abilities"),
            power_toughness,
            flavor_text: field(data, "flavorText"),
            rarity,
        }
    }

    /// The deterministic placeholder used when the generator cannot produce
    /// usable output after retries.
    pub fn fallback(rarity: Option<Rarity>) -> Self {
        CardData {
            name: "Default Card".to_string(),
            mana_cost: "{0}".to_string(),
            card_type: "Basic Creature - Placeholder".to_string(),
            color: "Colorless".to_string(),
            abilities: "None".to_string(),
            power_toughness: None,
            flavor_text: "Default fallback card.".to_string(),
            rarity: rarity.unwrap_or(Rarity::Common),
        }
    }
}

fn field(data: &Map<String, Value>, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => default_for_field(key).to_string(),
    }
}
