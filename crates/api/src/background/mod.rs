//! Background artwork jobs.
//!
//! Artwork generation for an existing card runs detached via
//! `tokio::spawn`; the [`ImageJobTracker`] records each job's state so
//! the status endpoint can answer polls without touching the database.

pub mod image_jobs;

pub use image_jobs::{ImageJobState, ImageJobTracker};
