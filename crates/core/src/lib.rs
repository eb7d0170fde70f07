//! Pure domain logic for card generation.
//!
//! No IO happens in this crate: normalization of raw generator output,
//! set/number sequencing, pack composition, prompt construction, and
//! image-reference naming rules are all plain functions so they can be
//! unit tested without a database or network.

pub mod card;
pub mod error;
pub mod naming;
pub mod normalize;
pub mod pack;
pub mod prompt;
pub mod rarity;
pub mod sequence;
pub mod types;
