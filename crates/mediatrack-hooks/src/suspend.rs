//! Process-wide tracking suspension
//!
//! Bulk imports and migrations can switch tracking off while they run. The switch is
//! process-wide: while a [`SuspendGuard`] is alive, every hook in the process ignores
//! lifecycle events, including hooks serving unrelated concurrent scopes. Hold the guard
//! only around the operation that needs it.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of live guards.
static ACTIVE_GUARDS: AtomicUsize = AtomicUsize::new(0);

pub fn is_suspended() -> bool {
    ACTIVE_GUARDS.load(Ordering::SeqCst) > 0
}

/// Suspend tracking until the returned guard is dropped.
///
/// Guards may overlap and be dropped in any order; tracking resumes once the last one is
/// gone.
pub fn suspend_tracking() -> SuspendGuard {
    let active = ACTIVE_GUARDS.fetch_add(1, Ordering::SeqCst) + 1;
    tracing::warn!(active_guards = active, "Media tracking suspended for this process");
    SuspendGuard { _private: () }
}

#[must_use = "tracking resumes as soon as the guard is dropped"]
pub struct SuspendGuard {
    _private: (),
}

impl Drop for SuspendGuard {
    fn drop(&mut self) {
        let remaining = ACTIVE_GUARDS.fetch_sub(1, Ordering::SeqCst) - 1;
        if remaining == 0 {
            tracing::info!("Media tracking resumed");
        }
    }
}
