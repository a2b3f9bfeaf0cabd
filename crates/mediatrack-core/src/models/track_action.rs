use serde::Serialize;
use std::fmt;

/// Direction of a media reference change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackOperation {
    /// The entity no longer references the file
    Untrack,
    /// The entity now references the file
    Track,
}

impl TrackOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackOperation::Untrack => "untrack",
            TrackOperation::Track => "track",
        }
    }
}

impl fmt::Display for TrackOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Zero, negative and missing ids all mean "no file".
pub fn is_valid_media_file_id(value: Option<i64>) -> bool {
    matches!(value, Some(id) if id > 0)
}

/// One instruction for the media reference counter.
///
/// Equality covers every field; deduplication within a save operation and across a
/// logical scope relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TrackAction {
    album: String,
    entity_name: String,
    entity_id: i64,
    media_file_id: i64,
    operation: TrackOperation,
}

impl TrackAction {
    /// Build an action, or `None` when `media_file_id` is not a valid reference.
    pub fn new(
        album: impl Into<String>,
        entity_name: impl Into<String>,
        entity_id: i64,
        media_file_id: Option<i64>,
        operation: TrackOperation,
    ) -> Option<Self> {
        if !is_valid_media_file_id(media_file_id) {
            return None;
        }
        let media_file_id = media_file_id?;

        Some(Self {
            album: album.into(),
            entity_name: entity_name.into(),
            entity_id,
            media_file_id,
            operation,
        })
    }

    pub fn track(
        album: impl Into<String>,
        entity_name: impl Into<String>,
        entity_id: i64,
        media_file_id: Option<i64>,
    ) -> Option<Self> {
        Self::new(
            album,
            entity_name,
            entity_id,
            media_file_id,
            TrackOperation::Track,
        )
    }

    pub fn untrack(
        album: impl Into<String>,
        entity_name: impl Into<String>,
        entity_id: i64,
        media_file_id: Option<i64>,
    ) -> Option<Self> {
        Self::new(
            album,
            entity_name,
            entity_id,
            media_file_id,
            TrackOperation::Untrack,
        )
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn entity_id(&self) -> i64 {
        self.entity_id
    }

    pub fn media_file_id(&self) -> i64 {
        self.media_file_id
    }

    pub fn operation(&self) -> TrackOperation {
        self.operation
    }
}

impl fmt::Display for TrackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file {} for {}/{} in '{}'",
            self.operation, self.media_file_id, self.entity_name, self.entity_id, self.album
        )
    }
}
