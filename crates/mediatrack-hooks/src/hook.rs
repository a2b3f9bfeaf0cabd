//! Commit coordination
//!
//! [`MediaTrackerHook`] receives the persistence layer's lifecycle callbacks for one logical
//! scope. Each save operation runs through the same protocol:
//!
//! 1. `on_updating` for every entity about to be updated (changes are staged).
//! 2. `on_inserted` / `on_updated` / `on_deleted` once the write went through.
//! 3. `on_after_save_completed` when the whole save succeeded, or `on_save_failed` when it
//!    did not.

use std::collections::HashSet;
use std::sync::Arc;

use mediatrack_core::{TrackAction, TrackingConfig, TrackingError, TrackingResult};

use crate::entry::{HookedEntry, SavePhase};
use crate::extractor::{extract, Extraction};
use crate::ledger::TrackLedger;
use crate::registry::TrackedPropertyProvider;
use crate::staging::PendingChanges;
use crate::suspend::is_suspended;
use crate::tracker::{MediaTracker, TrackerScope};

pub struct MediaTrackerHook {
    properties: Arc<dyn TrackedPropertyProvider>,
    tracker: Arc<dyn MediaTracker>,
    config: TrackingConfig,
    ledger: TrackLedger,
    pending: PendingChanges,
}

impl MediaTrackerHook {
    pub fn new(
        properties: Arc<dyn TrackedPropertyProvider>,
        tracker: Arc<dyn MediaTracker>,
        config: TrackingConfig,
    ) -> Self {
        Self {
            properties,
            tracker,
            config,
            ledger: TrackLedger::new(),
            pending: PendingChanges::new(),
        }
    }

    /// Before-update callback.
    pub fn on_updating(&mut self, entry: &dyn HookedEntry) -> TrackingResult<()> {
        self.on_entity_event(entry, SavePhase::PreCommit)
    }

    pub fn on_inserted(&mut self, entry: &dyn HookedEntry) -> TrackingResult<()> {
        self.on_entity_event(entry, SavePhase::PostCommit)
    }

    pub fn on_updated(&mut self, entry: &dyn HookedEntry) -> TrackingResult<()> {
        self.on_entity_event(entry, SavePhase::PostCommit)
    }

    pub fn on_deleted(&mut self, entry: &dyn HookedEntry) -> TrackingResult<()> {
        self.on_entity_event(entry, SavePhase::PostCommit)
    }

    /// Record what `entry` means for media references in the current save operation.
    ///
    /// Fails only when the entity type has no registered tracked properties.
    pub fn on_entity_event(
        &mut self,
        entry: &dyn HookedEntry,
        phase: SavePhase,
    ) -> TrackingResult<()> {
        if !self.config.enabled {
            tracing::trace!(
                entity_type = %entry.entity_type(),
                "Media tracking disabled, ignoring lifecycle event"
            );
            return Ok(());
        }
        if is_suspended() {
            tracing::warn!(
                entity = %entry.key(),
                entity_type = %entry.entity_type(),
                "Media tracking suspended, ignoring lifecycle event"
            );
            return Ok(());
        }

        let extraction = match extract(self.properties.as_ref(), entry, phase) {
            Ok(extraction) => extraction,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    entity_type = %entry.entity_type(),
                    "Lifecycle hook invoked for an untracked entity type"
                );
                return Err(err);
            }
        };

        match extraction {
            Extraction::Stage(actions) => {
                tracing::debug!(
                    entity = %entry.key(),
                    entity_type = %entry.entity_type(),
                    count = actions.len(),
                    "Staged media reference changes"
                );
                self.pending.stage(entry.key(), actions);
            }
            Extraction::Finalize(actions) => {
                self.ledger.add_to_unit(actions);
            }
            Extraction::PromoteStaged => {
                if let Some(actions) = self.pending.promote(entry.key()) {
                    tracing::debug!(
                        entity = %entry.key(),
                        count = actions.len(),
                        "Promoted staged media reference changes"
                    );
                    self.ledger.add_to_unit(actions.iter().cloned());
                }
            }
            Extraction::Skip => {}
        }

        Ok(())
    }

    /// End of a successful save operation.
    ///
    /// Forwards the actions not yet reported in this scope in one batch. Transient state is
    /// cleared on every path. A delivery failure is returned to the caller, but the batch
    /// still counts as reported and will not be sent again in this scope.
    #[tracing::instrument(skip(self))]
    pub fn on_after_save_completed(&mut self) -> TrackingResult<()> {
        let result = self.forward_unit();
        self.pending.clear();
        result
    }

    /// The save operation failed; nothing from it may reach the tracker.
    pub fn on_save_failed(&mut self) {
        tracing::debug!(
            unit = self.ledger.unit().len(),
            staged = self.pending.len(),
            "Save failed, discarding pending media reference changes"
        );
        self.ledger.discard_unit();
        self.pending.clear();
    }

    fn forward_unit(&mut self) -> TrackingResult<()> {
        let Some(batch) = self.ledger.take_unreported() else {
            tracing::debug!("No new media references to report");
            return Ok(());
        };

        let scope = TrackerScope::begin(
            self.tracker.as_ref(),
            self.config.make_transient_on_orphan,
        );

        match scope.track_many(&batch) {
            Ok(()) => {
                tracing::info!(count = batch.len(), "Forwarded media track actions");
                Ok(())
            }
            Err(e) => {
                // TODO: queue failed batches for redelivery instead of dropping them
                tracing::warn!(
                    error = %e,
                    count = batch.len(),
                    "Media tracker failed to apply track actions; batch will not be resent"
                );
                Err(TrackingError::forwarding(batch.len(), e))
            }
        }
    }

    pub fn is_tracking_enabled(&self) -> bool {
        self.config.enabled && !is_suspended()
    }

    /// Everything reported to the tracker during this scope.
    pub fn session_actions(&self) -> &HashSet<TrackAction> {
        self.ledger.session()
    }

    pub fn unit_len(&self) -> usize {
        self.ledger.unit().len()
    }

    pub fn staged_len(&self) -> usize {
        self.pending.len()
    }
}
