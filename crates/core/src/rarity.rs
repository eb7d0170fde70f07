//! The four rarity tiers and their pack-draw probabilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rarity tier of a card. Controls pack-opening draw weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Mythic Rare")]
    MythicRare,
}

/// Probability of the rare slot holding a Rare in a sealed pack.
pub const RARE_PROBABILITY: f64 = 0.08;
/// Probability of the rare slot holding a Mythic Rare in a sealed pack.
pub const MYTHIC_PROBABILITY: f64 = 0.02;

impl Rarity {
    /// All tiers, least to most scarce.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::MythicRare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::MythicRare => "Mythic Rare",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ();

    /// Parse a rarity name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "mythic rare" | "mythic" => Ok(Rarity::MythicRare),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_display_and_parse() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.as_str().parse::<Rarity>(), Ok(rarity));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("MYTHIC RARE".parse::<Rarity>(), Ok(Rarity::MythicRare));
        assert_eq!(" rare ".parse::<Rarity>(), Ok(Rarity::Rare));
    }

    #[test]
    fn parse_rejects_unknown_tiers() {
        assert!("Legendary".parse::<Rarity>().is_err());
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Rarity::MythicRare).unwrap();
        assert_eq!(json, "\"Mythic Rare\"");
    }
}
