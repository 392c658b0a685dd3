//! A cloneable, lock-guarded handle for sharing one engine across threads.

use crate::config::MutatorConfig;
use crate::mutator::Mutator;
use crate::notify::{ChangeNotice, MutatorEvent};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Shared access to a [`Mutator`].
///
/// Every call takes the lock for the whole instance, so each mutation
/// (push, eviction, notification) runs to completion before another caller
/// sees the engine. Hold a [`write`](Self::write) guard to run several calls
/// as one unit.
#[derive(Clone, Debug, Default)]
pub struct SharedMutator {
    inner: Arc<RwLock<Mutator>>,
}

impl SharedMutator {
    pub fn new(config: MutatorConfig) -> Self {
        Self::from_mutator(Mutator::new(config))
    }

    pub fn from_mutator(mutator: Mutator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(mutator)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Mutator> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Mutator> {
        self.inner.write()
    }

    pub fn initialize(&self, value: Value) {
        self.inner.write().initialize(value);
    }

    pub fn create(&self, patch: Value, origin: Option<&str>) {
        self.inner.write().create(patch, origin);
    }

    pub fn update(&self, patch: Value, origin: Option<&str>) {
        self.inner.write().update(patch, origin);
    }

    pub fn delete(&self, patch: Value, origin: Option<&str>) {
        self.inner.write().delete(patch, origin);
    }

    pub fn undo(&self) -> bool {
        self.inner.write().undo()
    }

    pub fn redo(&self) -> bool {
        self.inner.write().redo()
    }

    pub fn get_snapshot(&self) -> Value {
        self.inner.read().get_snapshot()
    }

    pub fn changes(&self) -> ChangeNotice {
        self.inner.read().changes().clone()
    }

    pub fn can_undo(&self) -> bool {
        self.inner.read().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.read().can_redo()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MutatorEvent> {
        self.inner.read().subscribe()
    }
}
