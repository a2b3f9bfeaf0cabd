//! Data models for media reference tracking
//!
//! Each sub-module represents one concept: the track instruction itself, the
//! metadata describing media-bearing properties, and entity identity within a save.

mod entity;
mod property;
mod track_action;

// Re-export all models for convenient imports
pub use entity::*;
pub use property::*;
pub use track_action::*;
