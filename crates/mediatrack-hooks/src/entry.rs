//! The view of a persisted entity that the persistence layer hands to the hooks.

use mediatrack_core::{EntityKey, EntityState};

/// Which side of the database write a callback runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePhase {
    /// The entity is about to be written; original and current values are comparable.
    PreCommit,
    /// The write went through; the entity reflects its final state.
    PostCommit,
}

/// An entity taking part in a save operation.
///
/// Property values are media file ids. `None` means the property is null or the entity has
/// no such property; callers never distinguish the two.
pub trait HookedEntry {
    /// Correlation token for this entity instance within the current save operation.
    fn key(&self) -> EntityKey;

    /// Entity type name used for the property lookup and recorded on each action.
    fn entity_type(&self) -> &str;

    fn entity_id(&self) -> i64;

    /// State the entity was in when the save operation started.
    fn initial_state(&self) -> EntityState;

    /// Value as loaded from the store, before any pending modification.
    fn original_value(&self, property: &str) -> Option<i64>;

    fn current_value(&self, property: &str) -> Option<i64>;

    /// Whether the pending write changes `property`.
    ///
    /// Hosts with their own dirty tracking should override this.
    fn is_modified(&self, property: &str) -> bool {
        self.original_value(property) != self.current_value(property)
    }
}
