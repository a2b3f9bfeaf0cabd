//! Process-wide suspension tests.
//!
//! The suspend flag is shared by every hook in the process, so these tests live in their
//! own binary and take a lock to avoid observing each other's guards.

mod helpers;

use std::sync::{Arc, Mutex};

use helpers::{product_accessors, setup_hook, Product};
use mediatrack_core::EntityKey;
use mediatrack_hooks::{is_suspended, suspend_tracking};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

static FLAG_LOCK: Mutex<()> = Mutex::new(());

/// Collects the level of every event emitted by the coordinator module.
#[derive(Clone, Default)]
struct HookEventLevels(Arc<Mutex<Vec<Level>>>);

impl<S: Subscriber> Layer<S> for HookEventLevels {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().module_path() == Some("mediatrack_hooks::hook") {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }
}

#[test]
fn test_suspended_hook_produces_no_actions() {
    let _lock = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (mut hook, tracker) = setup_hook();
    let accessors = product_accessors();
    let before = Product::new(7, Some(3));
    let after = Product::new(7, Some(5));
    let inserted = Product::new(9, Some(12));

    {
        let _guard = suspend_tracking();
        assert!(!hook.is_tracking_enabled());

        let key = EntityKey::next();
        hook.on_updating(&accessors.modified(key, &before, &after))
            .unwrap();
        hook.on_updated(&accessors.modified(key, &before, &after))
            .unwrap();
        hook.on_inserted(&accessors.added(EntityKey::next(), &inserted))
            .unwrap();
        hook.on_after_save_completed().unwrap();
    }

    assert!(tracker.batches().is_empty());
    assert_eq!(hook.staged_len(), 0);
    assert!(hook.is_tracking_enabled());
}

#[test]
fn test_nested_guard_keeps_outer_suspension() {
    let _lock = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    assert!(!is_suspended());

    let outer = suspend_tracking();
    {
        let _inner = suspend_tracking();
        assert!(is_suspended());
    }
    assert!(is_suspended(), "inner guard must not lift the outer suspension");

    drop(outer);
    assert!(!is_suspended());
}

#[test]
fn test_overlapping_guards_released_out_of_order() {
    let _lock = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (mut hook, tracker) = setup_hook();
    let accessors = product_accessors();
    let product = Product::new(9, Some(12));

    let first_import = suspend_tracking();
    let second_import = suspend_tracking();
    drop(first_import);

    assert!(is_suspended(), "second import still holds its guard");
    hook.on_inserted(&accessors.added(EntityKey::next(), &product))
        .unwrap();
    hook.on_after_save_completed().unwrap();
    assert!(tracker.batches().is_empty());

    drop(second_import);
    assert!(!is_suspended());

    hook.on_inserted(&accessors.added(EntityKey::next(), &product))
        .unwrap();
    hook.on_after_save_completed().unwrap();
    assert_eq!(tracker.batches().len(), 1);
}

#[test]
fn test_events_ignored_while_suspended_are_logged_as_warnings() {
    let _lock = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let levels = HookEventLevels::default();
    let subscriber = tracing_subscriber::registry().with(levels.clone());
    let (mut hook, _tracker) = setup_hook();
    let accessors = product_accessors();
    let product = Product::new(9, Some(12));

    tracing::subscriber::with_default(subscriber, || {
        let _guard = suspend_tracking();
        hook.on_inserted(&accessors.added(EntityKey::next(), &product))
            .unwrap();
    });

    assert_eq!(*levels.0.lock().unwrap(), vec![Level::WARN]);
}

#[test]
fn test_guard_restores_on_panic() {
    let _lock = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let result = std::panic::catch_unwind(|| {
        let _guard = suspend_tracking();
        panic!("import failed");
    });

    assert!(result.is_err());
    assert!(!is_suspended());
}

#[test]
fn test_unrelated_hooks_are_suspended_too() {
    let _lock = FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let (mut first, first_tracker) = setup_hook();
    let (mut second, second_tracker) = setup_hook();
    let accessors = product_accessors();
    let product = Product::new(9, Some(12));

    let guard = suspend_tracking();
    first
        .on_inserted(&accessors.added(EntityKey::next(), &product))
        .unwrap();
    first.on_after_save_completed().unwrap();
    drop(guard);

    second
        .on_inserted(&accessors.added(EntityKey::next(), &product))
        .unwrap();
    second.on_after_save_completed().unwrap();

    assert!(first_tracker.batches().is_empty());
    assert_eq!(second_tracker.batches().len(), 1);
}
