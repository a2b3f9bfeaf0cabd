//! Unit and session deduplication sets
//!
//! The unit set collects actions finalized during the current save operation. The session
//! set remembers everything already handed to the tracker during the logical scope, so an
//! action is reported at most once per scope.

use std::collections::HashSet;

use mediatrack_core::TrackAction;

#[derive(Debug, Default)]
pub struct TrackLedger {
    unit: HashSet<TrackAction>,
    session: HashSet<TrackAction>,
}

impl TrackLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_unit(&mut self, actions: impl IntoIterator<Item = TrackAction>) {
        self.unit.extend(actions);
    }

    /// Close the current unit.
    ///
    /// Returns the actions not yet reported in this scope and records them as reported.
    /// The unit set is empty afterwards whatever the outcome.
    pub fn take_unreported(&mut self) -> Option<HashSet<TrackAction>> {
        let mut unit = std::mem::take(&mut self.unit);
        unit.retain(|action| !self.session.contains(action));

        if unit.is_empty() {
            return None;
        }

        self.session.extend(unit.iter().cloned());
        Some(unit)
    }

    /// Drop the current unit without touching session history.
    pub fn discard_unit(&mut self) {
        self.unit.clear();
    }

    pub fn unit(&self) -> &HashSet<TrackAction> {
        &self.unit
    }

    pub fn session(&self) -> &HashSet<TrackAction> {
        &self.session
    }
}
