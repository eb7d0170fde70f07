//! Pack composition policy.
//!
//! A sealed pack always holds the same multiset of rarities: one rare slot
//! (Rare or Mythic Rare), three Uncommons, six Commons. Only the rare-slot
//! choice is randomized.

use rand::Rng;

use crate::rarity::{Rarity, MYTHIC_PROBABILITY, RARE_PROBABILITY};

/// Number of cards in a sealed pack.
pub const PACK_SIZE: usize = 10;

/// Uncommons per pack.
pub const UNCOMMONS_PER_PACK: usize = 3;

/// Commons per pack.
pub const COMMONS_PER_PACK: usize = 6;

/// Probability that the rare slot is a Mythic Rare, conditioned on the slot
/// existing (0.02 / (0.08 + 0.02)).
pub const MYTHIC_SLOT_WEIGHT: f64 = MYTHIC_PROBABILITY / (RARE_PROBABILITY + MYTHIC_PROBABILITY);

/// Draw the ordered rarity sequence for one pack: the rare slot first, then
/// the Uncommons, then the Commons.
pub fn pack_rarities<R: Rng + ?Sized>(rng: &mut R) -> Vec<Rarity> {
    let rare_slot = if rng.random_bool(MYTHIC_SLOT_WEIGHT) {
        Rarity::MythicRare
    } else {
        Rarity::Rare
    };

    let mut rarities = Vec::with_capacity(PACK_SIZE);
    rarities.push(rare_slot);
    rarities.extend(std::iter::repeat_n(Rarity::Uncommon, UNCOMMONS_PER_PACK));
    rarities.extend(std::iter::repeat_n(Rarity::Common, COMMONS_PER_PACK));
    rarities
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn count(rarities: &[Rarity], rarity: Rarity) -> usize {
        rarities.iter().filter(|r| **r == rarity).count()
    }

    #[test]
    fn pack_has_fixed_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let pack = pack_rarities(&mut rng);
            assert_eq!(pack.len(), PACK_SIZE);
            let rare_slot = count(&pack, Rarity::Rare) + count(&pack, Rarity::MythicRare);
            assert_eq!(rare_slot, 1);
            assert_eq!(count(&pack, Rarity::Uncommon), UNCOMMONS_PER_PACK);
            assert_eq!(count(&pack, Rarity::Common), COMMONS_PER_PACK);
        }
    }

    #[test]
    fn rare_slot_comes_first() {
        let mut rng = StdRng::seed_from_u64(3);
        let pack = pack_rarities(&mut rng);
        assert!(matches!(pack[0], Rarity::Rare | Rarity::MythicRare));
    }

    #[test]
    fn both_rare_slot_outcomes_occur() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut saw_rare = false;
        let mut saw_mythic = false;
        for _ in 0..500 {
            match pack_rarities(&mut rng)[0] {
                Rarity::Rare => saw_rare = true,
                Rarity::MythicRare => saw_mythic = true,
                _ => unreachable!(),
            }
        }
        assert!(saw_rare && saw_mythic);
    }
}
