use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of correlation tokens.
static NEXT_ENTITY_KEY: AtomicU64 = AtomicU64::new(1);

/// Correlation token identifying one entity instance within a save operation.
///
/// Newly inserted entities have no persisted id yet, so pending changes are keyed by this
/// token instead. Hosts assign a token when an entity is attached to a save operation and
/// keep returning the same token for that instance until the save completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey(u64);

impl EntityKey {
    /// Allocate a token that is unique for the lifetime of the process.
    pub fn next() -> Self {
        Self(NEXT_ENTITY_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a token the host already manages (e.g. an index into its own arena).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_keys_are_distinct() {
        let a = EntityKey::next();
        let b = EntityKey::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn raw_keys_round_trip() {
        let key = EntityKey::from_raw(42);
        assert_eq!(key.get(), 42);
        assert_eq!(key.to_string(), "entity#42");
    }
}
