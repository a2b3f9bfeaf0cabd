use serde::{Deserialize, Serialize};
use std::fmt;

/// A media-bearing property of an entity type.
///
/// The property holds a media file id; `album` names the bucket references through this
/// property are counted in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackedProperty {
    pub name: String,
    pub album: String,
}

impl TrackedProperty {
    pub fn new(name: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            album: album.into(),
        }
    }
}

/// State of an entity at the start of a save operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityState {
    Added,
    Modified,
    Deleted,
    Unchanged,
}

impl EntityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityState::Added => "added",
            EntityState::Modified => "modified",
            EntityState::Deleted => "deleted",
            EntityState::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
