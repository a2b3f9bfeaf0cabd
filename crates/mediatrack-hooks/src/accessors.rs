//! Typed accessor tables for entity types that carry media references.
//!
//! Each tracked entity type gets one [`EntityAccessors`] table, built once at startup. The
//! table maps property names to plain getter functions, so reading a media reference on
//! insert or delete never needs runtime introspection. The same table feeds the
//! [`TrackedPropertyRegistry`](crate::TrackedPropertyRegistry).

use std::collections::HashMap;

use mediatrack_core::{EntityKey, EntityState, TrackedProperty};

use crate::entry::HookedEntry;

/// Reads a media file id from an entity.
pub type PropertyGetter<E> = fn(&E) -> Option<i64>;

pub struct EntityAccessors<E> {
    entity_type: String,
    id: fn(&E) -> i64,
    properties: Vec<TrackedProperty>,
    getters: HashMap<String, PropertyGetter<E>>,
}

impl<E> EntityAccessors<E> {
    pub fn new(entity_type: impl Into<String>, id: fn(&E) -> i64) -> Self {
        Self {
            entity_type: entity_type.into(),
            id,
            properties: Vec::new(),
            getters: HashMap::new(),
        }
    }

    /// Register a media-bearing property. Registering the same name twice replaces the
    /// earlier album and getter.
    pub fn property(
        mut self,
        name: impl Into<String>,
        album: impl Into<String>,
        getter: PropertyGetter<E>,
    ) -> Self {
        let property = TrackedProperty::new(name, album);
        self.properties.retain(|p| p.name != property.name);
        self.getters.insert(property.name.clone(), getter);
        self.properties.push(property);
        self
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn properties(&self) -> &[TrackedProperty] {
        &self.properties
    }

    pub fn entity_id(&self, entity: &E) -> i64 {
        (self.id)(entity)
    }

    /// Read `property` from `entity`; unknown properties read as no reference.
    pub fn read(&self, entity: &E, property: &str) -> Option<i64> {
        self.getters.get(property).and_then(|getter| getter(entity))
    }

    pub fn added<'a>(&'a self, key: EntityKey, entity: &'a E) -> TypedEntry<'a, E> {
        TypedEntry::new(self, key, EntityState::Added, None, entity)
    }

    /// Entry for an update; `original` is the entity as it was loaded.
    pub fn modified<'a>(
        &'a self,
        key: EntityKey,
        original: &'a E,
        current: &'a E,
    ) -> TypedEntry<'a, E> {
        TypedEntry::new(self, key, EntityState::Modified, Some(original), current)
    }

    pub fn deleted<'a>(&'a self, key: EntityKey, entity: &'a E) -> TypedEntry<'a, E> {
        TypedEntry::new(self, key, EntityState::Deleted, None, entity)
    }

    pub fn unchanged<'a>(&'a self, key: EntityKey, entity: &'a E) -> TypedEntry<'a, E> {
        TypedEntry::new(self, key, EntityState::Unchanged, None, entity)
    }
}

/// [`HookedEntry`] over a typed entity and its accessor table.
pub struct TypedEntry<'a, E> {
    accessors: &'a EntityAccessors<E>,
    key: EntityKey,
    state: EntityState,
    original: Option<&'a E>,
    current: &'a E,
}

impl<'a, E> TypedEntry<'a, E> {
    fn new(
        accessors: &'a EntityAccessors<E>,
        key: EntityKey,
        state: EntityState,
        original: Option<&'a E>,
        current: &'a E,
    ) -> Self {
        Self {
            accessors,
            key,
            state,
            original,
            current,
        }
    }
}

impl<E> HookedEntry for TypedEntry<'_, E> {
    fn key(&self) -> EntityKey {
        self.key
    }

    fn entity_type(&self) -> &str {
        self.accessors.entity_type()
    }

    fn entity_id(&self) -> i64 {
        self.accessors.entity_id(self.current)
    }

    fn initial_state(&self) -> EntityState {
        self.state
    }

    fn original_value(&self, property: &str) -> Option<i64> {
        let snapshot = self.original.unwrap_or(self.current);
        self.accessors.read(snapshot, property)
    }

    fn current_value(&self, property: &str) -> Option<i64> {
        self.accessors.read(self.current, property)
    }
}
