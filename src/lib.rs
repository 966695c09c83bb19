//! Matchday Dashboard - server-rendered page for daily football picks
//!
//! Loads the recommended-picks, predictions and scores feeds published by
//! the daily export job and renders each into its own page section. Every
//! section degrades to its own fallback text without affecting the others.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use crate::core::{format_confidence, Container, Dashboard, FeedPaths, ItemBlock, SectionStatus};
pub use services::{FeedError, FeedLoader};
