//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept an executor as the first argument.

pub mod card_repo;

pub use card_repo::CardRepo;
