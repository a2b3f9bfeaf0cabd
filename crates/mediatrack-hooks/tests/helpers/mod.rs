//! Shared fixtures for hook integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use mediatrack_core::{TrackAction, TrackingConfig};
use mediatrack_hooks::{EntityAccessors, MediaTracker, MediaTrackerHook, TrackedPropertyRegistry};

/// Test entity with one media reference.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub main_picture_id: Option<i64>,
}

impl Product {
    pub fn new(id: i64, main_picture_id: Option<i64>) -> Self {
        Self {
            id,
            main_picture_id,
        }
    }
}

/// Test entity with two media references in different albums.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub avatar_id: Option<i64>,
    pub banner_id: Option<i64>,
}

pub fn product_accessors() -> EntityAccessors<Product> {
    EntityAccessors::new("Product", |p: &Product| p.id).property(
        "MainPictureId",
        "catalog",
        |p: &Product| p.main_picture_id,
    )
}

pub fn customer_accessors() -> EntityAccessors<Customer> {
    EntityAccessors::new("Customer", |c: &Customer| c.id)
        .property("AvatarId", "avatars", |c: &Customer| c.avatar_id)
        .property("BannerId", "banners", |c: &Customer| c.banner_id)
}

/// Tracker that records every batch and scope transition.
#[derive(Default)]
pub struct RecordingTracker {
    batches: Mutex<Vec<HashSet<TrackAction>>>,
    scopes: Mutex<Vec<ScopeEvent>>,
    fail: AtomicBool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeEvent {
    Begin { make_transient_on_orphan: bool },
    End,
}

impl RecordingTracker {
    pub fn batches(&self) -> Vec<HashSet<TrackAction>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn scopes(&self) -> Vec<ScopeEvent> {
        self.scopes.lock().unwrap().clone()
    }

    pub fn fail_next_batches(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl MediaTracker for RecordingTracker {
    fn begin_scope(&self, make_transient_on_orphan: bool) {
        self.scopes.lock().unwrap().push(ScopeEvent::Begin {
            make_transient_on_orphan,
        });
    }

    fn end_scope(&self) {
        self.scopes.lock().unwrap().push(ScopeEvent::End);
    }

    fn track_many(&self, actions: &HashSet<TrackAction>) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("media tracker unavailable");
        }
        self.batches.lock().unwrap().push(actions.clone());
        Ok(())
    }
}

pub fn registry() -> TrackedPropertyRegistry {
    let mut registry = TrackedPropertyRegistry::new();
    registry
        .register_accessors(&product_accessors())
        .register_accessors(&customer_accessors());
    registry
}

pub fn setup_hook_with(config: TrackingConfig) -> (MediaTrackerHook, Arc<RecordingTracker>) {
    let tracker = Arc::new(RecordingTracker::default());
    let hook = MediaTrackerHook::new(Arc::new(registry()), tracker.clone(), config);
    (hook, tracker)
}

pub fn setup_hook() -> (MediaTrackerHook, Arc<RecordingTracker>) {
    setup_hook_with(TrackingConfig::default())
}

pub fn track(album: &str, entity: &str, id: i64, media_file_id: i64) -> TrackAction {
    TrackAction::track(album, entity, id, Some(media_file_id)).unwrap()
}

pub fn untrack(album: &str, entity: &str, id: i64, media_file_id: i64) -> TrackAction {
    TrackAction::untrack(album, entity, id, Some(media_file_id)).unwrap()
}
