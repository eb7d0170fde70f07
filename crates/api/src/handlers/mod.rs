//! HTTP handlers, grouped by concern.

pub mod cards;
pub mod generation;
pub mod images;
