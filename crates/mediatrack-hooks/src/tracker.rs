//! The downstream media reference counter.

use std::collections::HashSet;

use mediatrack_core::TrackAction;

/// Service that applies track actions to media reference counts.
///
/// Calls are synchronous from the hook's point of view. Implementations may defer their own
/// side effects (such as orphan detection) until the open scope ends.
pub trait MediaTracker: Send + Sync {
    /// Open a batch scope. Files that lose their last reference inside the scope become
    /// transient when `make_transient_on_orphan` is set.
    fn begin_scope(&self, make_transient_on_orphan: bool);

    /// Close the scope opened by the matching `begin_scope`.
    fn end_scope(&self);

    fn track_many(&self, actions: &HashSet<TrackAction>) -> anyhow::Result<()>;
}

/// An open tracker scope, closed when dropped.
#[must_use = "the tracker scope closes as soon as the guard is dropped"]
pub struct TrackerScope<'a> {
    tracker: &'a dyn MediaTracker,
}

impl<'a> TrackerScope<'a> {
    pub fn begin(tracker: &'a dyn MediaTracker, make_transient_on_orphan: bool) -> Self {
        tracker.begin_scope(make_transient_on_orphan);
        Self { tracker }
    }

    pub fn track_many(&self, actions: &HashSet<TrackAction>) -> anyhow::Result<()> {
        self.tracker.track_many(actions)
    }
}

impl Drop for TrackerScope<'_> {
    fn drop(&mut self) {
        self.tracker.end_scope();
    }
}
