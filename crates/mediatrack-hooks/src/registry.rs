//! Lookup of media-bearing properties per entity type.

use std::collections::HashMap;

use mediatrack_core::TrackedProperty;

use crate::accessors::EntityAccessors;

/// Source of tracked-property metadata.
///
/// Returns `None` when the entity type is not tracked at all; hooks treat that as a wiring
/// defect because they should never have been invoked for such a type.
pub trait TrackedPropertyProvider: Send + Sync {
    fn tracked_properties(&self, entity_type: &str) -> Option<&[TrackedProperty]>;
}

/// In-memory registry built once at startup.
#[derive(Debug, Clone, Default)]
pub struct TrackedPropertyRegistry {
    entities: HashMap<String, Vec<TrackedProperty>>,
}

impl TrackedPropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the tracked properties of an entity type.
    pub fn register(
        &mut self,
        entity_type: impl Into<String>,
        properties: impl IntoIterator<Item = TrackedProperty>,
    ) -> &mut Self {
        let entity_type = entity_type.into();
        let properties: Vec<TrackedProperty> = properties.into_iter().collect();

        tracing::debug!(
            entity_type = %entity_type,
            properties = properties.len(),
            "Registered tracked media properties"
        );

        self.entities.insert(entity_type, properties);
        self
    }

    /// Register the properties described by an accessor table.
    pub fn register_accessors<E>(&mut self, accessors: &EntityAccessors<E>) -> &mut Self {
        self.register(
            accessors.entity_type().to_string(),
            accessors.properties().iter().cloned(),
        )
    }

    pub fn contains(&self, entity_type: &str) -> bool {
        self.entities.contains_key(entity_type)
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }
}

impl TrackedPropertyProvider for TrackedPropertyRegistry {
    fn tracked_properties(&self, entity_type: &str) -> Option<&[TrackedProperty]> {
        self.entities.get(entity_type).map(Vec::as_slice)
    }
}
