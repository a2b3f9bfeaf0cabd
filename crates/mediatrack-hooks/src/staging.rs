//! Pending-change staging store
//!
//! Actions computed before the write are held here, keyed by entity instance, until the
//! save outcome is known. Entries are never removed one by one; the whole store is cleared
//! once per save operation.

use std::collections::{HashMap, HashSet};

use mediatrack_core::{EntityKey, TrackAction};

#[derive(Debug, Default)]
pub struct PendingChanges {
    entries: HashMap<EntityKey, HashSet<TrackAction>>,
}

impl PendingChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `actions` for `key`, replacing anything staged earlier for the same entity.
    pub fn stage(&mut self, key: EntityKey, actions: HashSet<TrackAction>) {
        self.entries.insert(key, actions);
    }

    /// Actions staged for `key`. The entry stays until [`clear`](Self::clear).
    pub fn promote(&self, key: EntityKey) -> Option<&HashSet<TrackAction>> {
        self.entries.get(&key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(media_file_id: i64) -> TrackAction {
        TrackAction::track("catalog", "Product", 7, Some(media_file_id)).unwrap()
    }

    #[test]
    fn stage_overwrites_instead_of_merging() {
        let mut pending = PendingChanges::new();
        let key = EntityKey::from_raw(1);

        pending.stage(key, HashSet::from([track(3)]));
        pending.stage(key, HashSet::from([track(5)]));

        assert_eq!(pending.promote(key), Some(&HashSet::from([track(5)])));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn promote_does_not_remove() {
        let mut pending = PendingChanges::new();
        let key = EntityKey::from_raw(1);
        pending.stage(key, HashSet::from([track(3)]));

        assert!(pending.promote(key).is_some());
        assert!(pending.promote(key).is_some());
        assert!(pending.promote(EntityKey::from_raw(2)).is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let mut pending = PendingChanges::new();
        pending.stage(EntityKey::from_raw(1), HashSet::from([track(3)]));
        pending.stage(EntityKey::from_raw(2), HashSet::new());

        pending.clear();
        assert!(pending.is_empty());
    }
}
