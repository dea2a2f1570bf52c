//! Undo/redo via bounded state snapshots.
//!
//! History is a stack of deep copies of the full zone collection. A
//! snapshot is recorded after each discrete edit (shape creation, property
//! edit batch, delete, drag completion) on top of an initial baseline;
//! undo/redo hand back a copy for wholesale replacement of the collection.

use zonekit_core::constants::MAX_HISTORY_SIZE;
use zonekit_core::event_bus::{EditorEvent, HistoryEvent};
use zonekit_core::EventBus;

use crate::model::Zone;

/// Bounded snapshot stack over the zone collection.
pub struct UndoRedoManager {
    history: Vec<Vec<Zone>>,
    /// Position of the current state. Meaningful only when the stack is
    /// non-empty.
    index: usize,
    max_size: usize,
    bus: EventBus,
}

impl UndoRedoManager {
    pub fn new(bus: EventBus) -> Self {
        Self {
            history: Vec::new(),
            index: 0,
            max_size: MAX_HISTORY_SIZE,
            bus,
        }
    }

    /// Records a snapshot of the given state, discarding any redo tail.
    /// The oldest snapshot is dropped once the stack is full.
    pub fn save(&mut self, zones: &[Zone]) {
        if !self.history.is_empty() {
            self.history.truncate(self.index + 1);
        }

        self.history.push(zones.to_vec());

        if self.history.len() > self.max_size {
            self.history.remove(0);
        } else if self.history.len() > 1 {
            self.index += 1;
        }

        self.notify_changed();
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.history.is_empty() && self.index + 1 < self.history.len()
    }

    /// Steps back one snapshot and returns a copy of it for restoration.
    pub fn undo(&mut self) -> Option<Vec<Zone>> {
        if !self.can_undo() {
            return None;
        }

        self.index -= 1;
        let state = self.history[self.index].clone();
        self.notify_changed();
        Some(state)
    }

    /// Steps forward one snapshot and returns a copy of it for restoration.
    pub fn redo(&mut self) -> Option<Vec<Zone>> {
        if !self.can_redo() {
            return None;
        }

        self.index += 1;
        let state = self.history[self.index].clone();
        self.notify_changed();
        Some(state)
    }

    /// Drops all snapshots.
    pub fn clear(&mut self) {
        self.history.clear();
        self.index = 0;
        self.notify_changed();
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn notify_changed(&self) {
        self.bus.publish(EditorEvent::History(HistoryEvent::Changed {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }));
    }
}

impl std::fmt::Debug for UndoRedoManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoRedoManager")
            .field("snapshots", &self.history.len())
            .field("index", &self.index)
            .finish()
    }
}
