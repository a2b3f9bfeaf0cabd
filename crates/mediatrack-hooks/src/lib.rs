//! Mediatrack Hooks
//!
//! Persistence lifecycle hooks that keep media reference counts in step with the domain
//! records pointing at media files. The persistence layer calls into [`MediaTrackerHook`]
//! before and after each save; the hook works out which media references changed, holds
//! them until the save outcome is known, and forwards each change to the [`MediaTracker`]
//! at most once per logical scope.
//!
//! A hook instance belongs to exactly one logical scope (one request, one batch job).
//! Create a fresh instance per scope and never share it across threads.

pub mod accessors;
pub mod entry;
pub mod extractor;
pub mod hook;
pub mod ledger;
pub mod registry;
pub mod staging;
pub mod suspend;
pub mod tracker;

pub use accessors::{EntityAccessors, PropertyGetter, TypedEntry};
pub use entry::{HookedEntry, SavePhase};
pub use extractor::{extract, Extraction};
pub use hook::MediaTrackerHook;
pub use ledger::TrackLedger;
pub use registry::{TrackedPropertyProvider, TrackedPropertyRegistry};
pub use staging::PendingChanges;
pub use suspend::{is_suspended, suspend_tracking, SuspendGuard};
pub use tracker::{MediaTracker, TrackerScope};
