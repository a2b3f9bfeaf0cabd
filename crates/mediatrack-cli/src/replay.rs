//! Drives recorded save operations through a [`MediaTrackerHook`].

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use mediatrack_core::{EntityKey, EntityState, TrackAction, TrackingConfig};
use mediatrack_hooks::{MediaTracker, MediaTrackerHook};

use crate::scenario::{EntityEvent, JsonEntry, SaveOutcome, Scenario};

/// Tracker that keeps every batch it receives.
#[derive(Default)]
pub struct BatchLog {
    batches: Mutex<Vec<Vec<TrackAction>>>,
}

impl BatchLog {
    fn batches(&self) -> MutexGuard<'_, Vec<Vec<TrackAction>>> {
        self.batches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove and return the batches received so far, each sorted for stable output.
    pub fn drain(&self) -> Vec<Vec<TrackAction>> {
        std::mem::take(&mut *self.batches())
    }
}

impl MediaTracker for BatchLog {
    fn begin_scope(&self, make_transient_on_orphan: bool) {
        tracing::debug!(make_transient_on_orphan, "Tracker scope opened");
    }

    fn end_scope(&self) {
        tracing::debug!("Tracker scope closed");
    }

    fn track_many(&self, actions: &HashSet<TrackAction>) -> anyhow::Result<()> {
        let mut batch: Vec<TrackAction> = actions.iter().cloned().collect();
        batch.sort();
        self.batches().push(batch);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SaveReport {
    pub index: usize,
    pub outcome: &'static str,
    pub forwarded: Vec<TrackAction>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub saves: Vec<SaveReport>,
    pub session_total: usize,
}

/// Replay every save of `scenario` within one logical scope.
///
/// Stops at the first tracking error; a configuration error means the schema does not
/// cover an entity type used by the scenario.
pub fn replay(scenario: &Scenario, config: TrackingConfig) -> anyhow::Result<ReplayReport> {
    let log = Arc::new(BatchLog::default());
    let mut hook = MediaTrackerHook::new(Arc::new(scenario.registry()), log.clone(), config);
    let mut saves = Vec::with_capacity(scenario.saves.len());

    for (index, save) in scenario.saves.iter().enumerate() {
        // One token per entity instance, shared by its pre- and post-commit callbacks.
        let entries: Vec<JsonEntry<'_>> = save
            .entities
            .iter()
            .map(|event| JsonEntry::new(EntityKey::next(), event))
            .collect();

        for (event, entry) in save.entities.iter().zip(&entries) {
            if event.state == EntityState::Modified {
                hook.on_updating(entry)?;
            }
        }

        let outcome = match save.outcome {
            SaveOutcome::Failure => {
                hook.on_save_failed();
                "failure"
            }
            SaveOutcome::Success => {
                for (event, entry) in save.entities.iter().zip(&entries) {
                    post_commit(&mut hook, event, entry)?;
                }
                hook.on_after_save_completed()?;
                "success"
            }
        };

        let forwarded = log.drain().into_iter().flatten().collect();
        saves.push(SaveReport {
            index,
            outcome,
            forwarded,
        });
    }

    Ok(ReplayReport {
        saves,
        session_total: hook.session_actions().len(),
    })
}

fn post_commit(
    hook: &mut MediaTrackerHook,
    event: &EntityEvent,
    entry: &JsonEntry<'_>,
) -> anyhow::Result<()> {
    match event.state {
        EntityState::Added => hook.on_inserted(entry)?,
        EntityState::Modified => hook.on_updated(entry)?,
        EntityState::Deleted => hook.on_deleted(entry)?,
        EntityState::Unchanged => {}
    }
    Ok(())
}

/// Render a report as an aligned text table.
pub fn render_table(report: &ReplayReport) -> String {
    let mut out = format!(
        "{:<6} {:<8} {:<8} {:<12} {:<20} {:>10}\n",
        "SAVE", "OUTCOME", "OP", "ALBUM", "ENTITY", "MEDIA"
    );

    for save in &report.saves {
        if save.forwarded.is_empty() {
            out.push_str(&format!("{:<6} {:<8} -\n", save.index, save.outcome));
            continue;
        }
        for action in &save.forwarded {
            out.push_str(&format!(
                "{:<6} {:<8} {:<8} {:<12} {:<20} {:>10}\n",
                save.index,
                save.outcome,
                action.operation().as_str(),
                action.album(),
                format!("{}/{}", action.entity_name(), action.entity_id()),
                action.media_file_id()
            ));
        }
    }

    out.push_str(&format!(
        "\n{} actions reported in this scope\n",
        report.session_total
    ));
    out
}
