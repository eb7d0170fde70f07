//! Domain model structs and DTOs.

pub mod card;
