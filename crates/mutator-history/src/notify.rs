//! Change notification: the engine's versioned, observable state.
//!
//! The current notice and the undo/redo flags are plain state that can be
//! polled at any time. Every change is also published on a broadcast
//! channel for observers that prefer to be told. Publishing never blocks; a
//! send with no live receivers is dropped, and a receiver that falls more
//! than [`EVENT_CAPACITY`] events behind sees `RecvError::Lagged`.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Events buffered per receiver before it starts lagging.
pub const EVENT_CAPACITY: usize = 100;

/// The latest change: a monotonically increasing version and the origin tag
/// of whoever caused it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeNotice {
    pub version: u64,
    pub origin: Option<String>,
}

/// Events emitted by a [`Mutator`](crate::Mutator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutatorEvent {
    /// The document changed (or was re-initialized).
    Changed(ChangeNotice),
    /// `can_undo` flipped to the carried value.
    UndoAvailability(bool),
    /// `can_redo` flipped to the carried value.
    RedoAvailability(bool),
}

#[derive(Debug)]
pub(crate) struct Notifier {
    notice: ChangeNotice,
    can_undo: bool,
    can_redo: bool,
    event_tx: broadcast::Sender<MutatorEvent>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            notice: ChangeNotice::default(),
            can_undo: false,
            can_redo: false,
            event_tx,
        }
    }

    pub(crate) fn notice(&self) -> &ChangeNotice {
        &self.notice
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.can_undo
    }

    pub(crate) fn can_redo(&self) -> bool {
        self.can_redo
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<MutatorEvent> {
        self.event_tx.subscribe()
    }

    /// Back to version 0 with no origin.
    pub(crate) fn reset(&mut self) {
        self.notice = ChangeNotice::default();
        let _ = self.event_tx.send(MutatorEvent::Changed(self.notice.clone()));
    }

    pub(crate) fn bump(&mut self, origin: Option<String>) {
        self.notice = ChangeNotice {
            version: self.notice.version + 1,
            origin,
        };
        let _ = self.event_tx.send(MutatorEvent::Changed(self.notice.clone()));
    }

    /// Publish flag events only for flags whose value changed.
    pub(crate) fn set_availability(&mut self, can_undo: bool, can_redo: bool) {
        if self.can_undo != can_undo {
            self.can_undo = can_undo;
            let _ = self.event_tx.send(MutatorEvent::UndoAvailability(can_undo));
        }
        if self.can_redo != can_redo {
            self.can_redo = can_redo;
            let _ = self.event_tx.send(MutatorEvent::RedoAvailability(can_redo));
        }
    }
}
