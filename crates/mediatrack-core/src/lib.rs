//! Mediatrack Core Library
//!
//! This crate provides the domain models, error types and configuration shared by the
//! media reference tracking hooks and the tools built on top of them.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::TrackingConfig;
pub use error::{LogLevel, TrackingError, TrackingResult};
pub use models::{
    is_valid_media_file_id, EntityKey, EntityState, TrackAction, TrackOperation, TrackedProperty,
};
