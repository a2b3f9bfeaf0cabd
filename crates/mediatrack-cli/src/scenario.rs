//! Scenario files: a property schema plus a sequence of recorded save operations.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};

use mediatrack_core::{EntityKey, EntityState, TrackedProperty};
use mediatrack_hooks::{HookedEntry, TrackedPropertyRegistry};

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Entity type name -> media-bearing properties
    #[serde(default)]
    pub schema: BTreeMap<String, Vec<TrackedProperty>>,
    #[serde(default)]
    pub saves: Vec<ScenarioSave>,
}

impl Scenario {
    pub fn registry(&self) -> TrackedPropertyRegistry {
        let mut registry = TrackedPropertyRegistry::new();
        for (entity_type, properties) in &self.schema {
            registry.register(entity_type.clone(), properties.iter().cloned());
        }
        registry
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaveOutcome {
    #[default]
    Success,
    Failure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSave {
    #[serde(default)]
    pub outcome: SaveOutcome,
    #[serde(default)]
    pub entities: Vec<EntityEvent>,
}

/// One entity instance taking part in a save.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityEvent {
    pub entity_type: String,
    pub id: i64,
    pub state: EntityState,
    /// Property values as loaded; only meaningful for modified entities.
    #[serde(default)]
    pub original: Map<String, Value>,
    /// Property values at save time.
    #[serde(default)]
    pub current: Map<String, Value>,
}

pub fn load_scenario(path: &Path) -> anyhow::Result<Scenario> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scenario file {}", path.display()))
}

/// [`HookedEntry`] backed by a JSON entity event.
pub struct JsonEntry<'a> {
    key: EntityKey,
    event: &'a EntityEvent,
}

impl<'a> JsonEntry<'a> {
    pub fn new(key: EntityKey, event: &'a EntityEvent) -> Self {
        Self { key, event }
    }
}

/// Null, missing and non-integer values all read as "no reference".
fn media_file_id(values: &Map<String, Value>, property: &str) -> Option<i64> {
    values.get(property).and_then(Value::as_i64)
}

impl HookedEntry for JsonEntry<'_> {
    fn key(&self) -> EntityKey {
        self.key
    }

    fn entity_type(&self) -> &str {
        &self.event.entity_type
    }

    fn entity_id(&self) -> i64 {
        self.event.id
    }

    fn initial_state(&self) -> EntityState {
        self.event.state
    }

    fn original_value(&self, property: &str) -> Option<i64> {
        if self.event.original.contains_key(property) {
            media_file_id(&self.event.original, property)
        } else {
            self.current_value(property)
        }
    }

    fn current_value(&self, property: &str) -> Option<i64> {
        media_file_id(&self.event.current, property)
    }
}
