//! Property change extraction
//!
//! Turns one lifecycle callback into candidate track actions. Extraction is a pure function
//! of the entry and the tracked-property metadata; deciding what to do with the result is
//! left to the hook.

use std::collections::HashSet;

use mediatrack_core::{
    EntityState, TrackAction, TrackOperation, TrackedProperty, TrackingError, TrackingResult,
};

use crate::entry::{HookedEntry, SavePhase};
use crate::registry::TrackedPropertyProvider;

/// Outcome of extracting one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one tracked property is about to change. Hold these until the save commits.
    Stage(HashSet<TrackAction>),
    /// Final actions for an inserted or deleted entity.
    Finalize(HashSet<TrackAction>),
    /// The entity was updated; whatever was staged before the write is authoritative.
    PromoteStaged,
    /// Nothing to record.
    Skip,
}

pub fn extract(
    provider: &dyn TrackedPropertyProvider,
    entry: &dyn HookedEntry,
    phase: SavePhase,
) -> TrackingResult<Extraction> {
    let entity_type = entry.entity_type();
    let properties = provider
        .tracked_properties(entity_type)
        .ok_or_else(|| TrackingError::configuration(entity_type))?;

    let extraction = match phase {
        SavePhase::PreCommit => pending_changes(properties, entry),
        SavePhase::PostCommit => match entry.initial_state() {
            EntityState::Added => {
                Extraction::Finalize(final_state(properties, entry, TrackOperation::Track))
            }
            EntityState::Deleted => {
                Extraction::Finalize(final_state(properties, entry, TrackOperation::Untrack))
            }
            EntityState::Modified => Extraction::PromoteStaged,
            EntityState::Unchanged => Extraction::Skip,
        },
    };

    Ok(extraction)
}

fn pending_changes(properties: &[TrackedProperty], entry: &dyn HookedEntry) -> Extraction {
    let mut actions = HashSet::new();
    let mut changed = false;

    for property in properties {
        if !entry.is_modified(&property.name) {
            continue;
        }
        changed = true;

        actions.extend(TrackAction::untrack(
            &property.album,
            entry.entity_type(),
            entry.entity_id(),
            entry.original_value(&property.name),
        ));
        actions.extend(TrackAction::track(
            &property.album,
            entry.entity_type(),
            entry.entity_id(),
            entry.current_value(&property.name),
        ));
    }

    if changed {
        Extraction::Stage(actions)
    } else {
        Extraction::Skip
    }
}

fn final_state(
    properties: &[TrackedProperty],
    entry: &dyn HookedEntry,
    operation: TrackOperation,
) -> HashSet<TrackAction> {
    properties
        .iter()
        .filter_map(|property| {
            TrackAction::new(
                &property.album,
                entry.entity_type(),
                entry.entity_id(),
                entry.current_value(&property.name),
                operation,
            )
        })
        .collect()
}
