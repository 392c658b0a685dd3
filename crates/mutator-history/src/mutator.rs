//! The history engine - a base snapshot plus bounded undo and redo stacks.
//!
//! The current document is never stored. It is recomputed on demand by
//! folding the undo stack over the base. When the undo stack outgrows the
//! limit, the oldest record is folded into the base instead, which keeps
//! `fold(base, undo_stack)` unchanged while bounding history.

use crate::config::{normalize_limit, MutatorConfig};
use crate::notify::{ChangeNotice, MutatorEvent, Notifier};
use crate::record::{Action, ChangeRecord};
use serde_json::{Map, Value};
use std::collections::VecDeque;
use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

/// An undoable, redoable document history.
#[derive(Debug)]
pub struct Mutator {
    /// Everything evicted from the undo stack, folded into the seed value.
    base: Value,
    /// Replayable records, oldest first.
    undo_stack: VecDeque<ChangeRecord>,
    /// Undone records, most recently undone last.
    redo_stack: Vec<ChangeRecord>,
    /// Maximum undo stack length. Always at least 1.
    limit: usize,
    notifier: Notifier,
}

impl Mutator {
    /// Create an engine with an empty `{}` base.
    pub fn new(config: MutatorConfig) -> Self {
        if config.limit == 0 {
            warn!(
                fallback = config.effective_limit(),
                "history limit of 0 is not positive, using the default"
            );
        }

        Self {
            base: Value::Object(Map::new()),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: config.effective_limit(),
            notifier: Notifier::new(),
        }
    }

    /// Create an engine that keeps at most `limit` undo entries.
    pub fn with_limit(limit: usize) -> Self {
        Self::new(MutatorConfig::with_limit(limit))
    }

    /// Seed the document. Drops all history and resets the version to 0.
    pub fn initialize(&mut self, value: Value) {
        debug!(limit = self.limit, "initializing document");
        self.base = value;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.refresh_availability();
        self.notifier.reset();
    }

    /// Record a create. Replays as a merge.
    pub fn create(&mut self, patch: Value, origin: Option<&str>) {
        self.push(ChangeRecord::new(Action::Create, patch), origin);
    }

    /// Record an update. Replays as a merge.
    pub fn update(&mut self, patch: Value, origin: Option<&str>) {
        self.push(ChangeRecord::new(Action::Update, patch), origin);
    }

    /// Record a delete. Every key the patch names is removed on replay.
    pub fn delete(&mut self, patch: Value, origin: Option<&str>) {
        self.push(ChangeRecord::new(Action::Delete, patch), origin);
    }

    fn push(&mut self, record: ChangeRecord, origin: Option<&str>) {
        trace!(action = %record.action(), "recording change");
        self.undo_stack.push_back(record);
        self.redo_stack.clear();
        self.evict();
        self.refresh_availability();
        self.notifier.bump(normalize_origin(origin));
    }

    /// Fold the oldest records into the base until the limit holds.
    fn evict(&mut self) {
        while self.undo_stack.len() > self.limit {
            if let Some(oldest) = self.undo_stack.pop_front() {
                debug!(action = %oldest.action(), limit = self.limit, "evicting oldest change into base");
                let base = std::mem::take(&mut self.base);
                self.base = oldest.apply(base);
            }
        }
    }

    /// Move the latest change to the redo stack.
    ///
    /// Returns false, without notifying, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.undo_stack.pop_back() else {
            return false;
        };
        trace!(action = %record.action(), "undoing change");
        self.redo_stack.push(record);
        self.refresh_availability();
        self.notifier.bump(None);
        true
    }

    /// Move the latest undone change back onto the undo stack.
    ///
    /// Only evicts when the limit shrank since the matching undo.
    /// Returns false, without notifying, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(record) = self.redo_stack.pop() else {
            return false;
        };
        trace!(action = %record.action(), "redoing change");
        self.undo_stack.push_back(record);
        self.evict();
        self.refresh_availability();
        self.notifier.bump(None);
        true
    }

    /// Recompute the current document.
    pub fn get_snapshot(&self) -> Value {
        self.undo_stack
            .iter()
            .fold(self.base.clone(), |doc, record| record.apply(doc))
    }

    /// Change the history limit, evicting right away if it shrank below the
    /// current undo stack. A limit of 0 falls back to the default.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = normalize_limit(limit);
        self.evict();
        self.refresh_availability();
    }

    fn refresh_availability(&mut self) {
        self.notifier
            .set_availability(!self.undo_stack.is_empty(), !self.redo_stack.is_empty());
    }

    /// The latest change notice.
    pub fn changes(&self) -> &ChangeNotice {
        self.notifier.notice()
    }

    pub fn version(&self) -> u64 {
        self.notifier.notice().version
    }

    pub fn can_undo(&self) -> bool {
        self.notifier.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.notifier.can_redo()
    }

    /// Subscribe to change and availability events.
    pub fn subscribe(&self) -> broadcast::Receiver<MutatorEvent> {
        self.notifier.subscribe()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The base snapshot history replays on top of.
    pub fn base(&self) -> &Value {
        &self.base
    }

    /// Undo stack records, oldest first.
    pub fn undo_stack(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.undo_stack.iter()
    }

    /// Redo stack records, most recently undone last.
    pub fn redo_stack(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.redo_stack.iter()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for Mutator {
    fn default() -> Self {
        Self::new(MutatorConfig::default())
    }
}

/// An empty tag is no tag.
fn normalize_origin(origin: Option<&str>) -> Option<String> {
    origin.filter(|tag| !tag.is_empty()).map(str::to_owned)
}
