//! Prompt construction for the text and image generators.

use crate::rarity::Rarity;

/// Build the text-generation prompt for a new card.
///
/// When no rarity is requested the generator may pick any of the four.
pub fn card_prompt(rarity: Option<Rarity>) -> String {
    let rarity_line = match rarity {
        Some(r) => r.as_str().to_string(),
        None => "Common, Uncommon, Rare, Mythic Rare".to_string(),
    };

    format!(
        "Create a unique Magic: The Gathering card with these attributes:\n\
         - Name: A creative, thematic name\n\
         - ManaCost: Using curly braces (e.g., {{2}}{{W}}{{U}})\n\
         - Type: Full type line (e.g., 'Legendary Creature - Elf Warrior')\n\
         - Color: White, Blue, Black, Red, Green, or Colorless\n\
         - Abilities: List of abilities or rules text\n\
         - PowerToughness: For creatures, e.g., '2/3', or null for non-creatures\n\
         - FlavorText: A short, thematic description or quote\n\
         - Rarity: {rarity_line}\n\
         Return the response as a JSON object."
    )
}

/// Build the artwork prompt for a card, derived deterministically from its
/// type line, color, rarity, and name.
pub fn image_prompt(name: &str, card_type: &str, color: &str, rarity: &str) -> String {
    let mut prompt = format!("Create fantasy artwork for {name}. ");

    if card_type.contains("Creature") {
        prompt.push_str(&format!("Show a {} in action. ", card_type.to_lowercase()));
    } else if card_type.contains("Enchantment") {
        prompt.push_str("Depict a magical aura or mystical effect. ");
    } else if card_type.contains("Artifact") {
        prompt.push_str("Illustrate a detailed magical item or relic. ");
    } else if card_type.contains("Land") {
        prompt.push_str(&format!("Illustrate a landscape for {name}. "));
    } else if card_type.contains("Planeswalker") {
        prompt.push_str(&format!(
            "Show a powerful {} character. ",
            card_type.to_lowercase()
        ));
    } else {
        prompt.push_str("Depict the card's effect in a visually appealing way. ");
    }

    prompt.push_str(&format!(
        "Use the {color} color scheme with {} quality. ",
        rarity.to_lowercase()
    ));
    prompt.push_str("High detail, dramatic lighting, no text or borders.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_for(card_type: &str) -> String {
        image_prompt("Test Subject", card_type, "Blue", "Mythic Rare")
    }

    #[test]
    fn card_prompt_names_requested_rarity() {
        let prompt = card_prompt(Some(Rarity::Rare));
        assert!(prompt.contains("- Rarity: Rare\n"));
    }

    #[test]
    fn card_prompt_offers_all_rarities_when_unspecified() {
        let prompt = card_prompt(None);
        assert!(prompt.contains("- Rarity: Common, Uncommon, Rare, Mythic Rare\n"));
    }

    #[test]
    fn creature_prompt_shows_an_action_scene() {
        let prompt = prompt_for("Legendary Creature - Elf Warrior");
        assert!(prompt.contains("legendary creature - elf warrior in action"));
    }

    #[test]
    fn each_type_gets_its_own_scene() {
        assert!(prompt_for("Enchantment").contains("magical aura"));
        assert!(prompt_for("Artifact").contains("magical item or relic"));
        assert!(prompt_for("Basic Land - Island").contains("landscape"));
        assert!(prompt_for("Legendary Planeswalker").contains("character"));
        assert!(prompt_for("Instant").contains("card's effect"));
    }

    #[test]
    fn artifact_creature_counts_as_creature() {
        let prompt = prompt_for("Artifact Creature - Golem");
        assert!(prompt.contains("in action"));
        assert!(!prompt.contains("relic"));
    }

    #[test]
    fn color_rarity_and_directive_always_present() {
        let prompt = prompt_for("Instant");
        assert!(prompt.contains("Use the Blue color scheme with mythic rare quality."));
        assert!(prompt.ends_with("High detail, dramatic lighting, no text or borders."));
    }
}
