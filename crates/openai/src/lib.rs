//! OpenAI-backed generator client.
//!
//! Wraps the remote text-generation (chat completions) and image-generation
//! APIs behind the [`Generator`] trait, with an explicit retry policy and a
//! transport/service/parse error taxonomy. Everything the rest of the
//! system knows about the external service lives here.

pub mod client;
pub mod error;
pub mod retry;

pub use client::{Generator, OpenAiGenerator};
pub use error::GeneratorError;
pub use retry::{retry, RetryPolicy};
