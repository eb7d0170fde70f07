//! Card generation pipeline.
//!
//! Orchestrates the generator client, the normalizer, and the sequence
//! allocator into single-card and pack-opening flows, degrading to
//! deterministic fallbacks when the external service cannot produce
//! usable output.

pub mod pipeline;
pub mod store;

pub use pipeline::{ArtworkError, CardPipeline};
pub use store::{CardStore, PgCardStore, StoreError};
