use std::collections::VecDeque;

use tracing::debug;

use crate::extensions::PlotEvent;
use crate::interaction::{CapturedRanges, ZoomGestureType};

use super::XyPlot;

/// Default number of gesture commits kept for undo.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// One undoable gesture commit: axis ranges before and after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomCommand {
    pub gesture: ZoomGestureType,
    pub before: CapturedRanges,
    pub after: CapturedRanges,
}

impl ZoomCommand {
    /// Whether applying the command would not move any axis.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}

/// Bounded undo/redo stacks of gesture commits.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomHistory {
    undo: VecDeque<ZoomCommand>,
    redo: Vec<ZoomCommand>,
    limit: usize,
}

impl Default for ZoomHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl ZoomHistory {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            redo: Vec::new(),
            limit,
        }
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Pushes a new command and clears the redo stack.
    ///
    /// No-op commands are dropped. Returns `true` when recorded.
    pub fn record(&mut self, command: ZoomCommand) -> bool {
        if self.limit == 0 || command.is_noop() {
            return false;
        }
        self.redo.clear();
        if self.undo.len() == self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(command);
        true
    }

    /// Moves the latest command to the redo stack and returns it.
    pub fn undo(&mut self) -> Option<&ZoomCommand> {
        let command = self.undo.pop_back()?;
        self.redo.push(command);
        self.redo.last()
    }

    /// Moves the latest undone command back to the undo stack and returns it.
    pub fn redo(&mut self) -> Option<&ZoomCommand> {
        let command = self.redo.pop()?;
        self.undo.push_back(command);
        self.undo.back()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl XyPlot {
    #[must_use]
    pub fn history(&self) -> &ZoomHistory {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.undo_len() > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.redo_len() > 0
    }

    /// Restores the axis ranges from before the latest gesture commit.
    ///
    /// Refused while a gesture is armed. Returns `true` when a command was undone.
    pub fn undo(&mut self) -> bool {
        if self.is_gesture_armed() {
            return false;
        }
        let Some(command) = self.history.undo() else {
            return false;
        };
        let ranges = command.before.clone();
        debug!(gesture = ?command.gesture, axes = ranges.len(), "undo zoom command");
        self.apply_captured(&ranges);
        self.emit_history_changed();
        true
    }

    /// Re-applies the latest undone gesture commit.
    pub fn redo(&mut self) -> bool {
        if self.is_gesture_armed() {
            return false;
        }
        let Some(command) = self.history.redo() else {
            return false;
        };
        let ranges = command.after.clone();
        debug!(gesture = ?command.gesture, axes = ranges.len(), "redo zoom command");
        self.apply_captured(&ranges);
        self.emit_history_changed();
        true
    }

    pub fn clear_history(&mut self) {
        if self.history.undo_len() == 0 && self.history.redo_len() == 0 {
            return;
        }
        self.history.clear();
        self.emit_history_changed();
    }

    pub(super) fn record_gesture_commit(
        &mut self,
        gesture: ZoomGestureType,
        before: CapturedRanges,
    ) {
        let after: CapturedRanges = before
            .iter()
            .filter_map(|(id, _)| self.axes.get(id).map(|axis| (*id, axis.range())))
            .collect();
        if self.history.record(ZoomCommand {
            gesture,
            before,
            after,
        }) {
            self.emit_history_changed();
        }
    }

    fn apply_captured(&mut self, ranges: &CapturedRanges) {
        for (id, range) in ranges {
            if let Some(axis) = self.axes.get_mut(id) {
                axis.restore_range(*range);
            }
        }
        self.flush_range_changes();
    }

    fn emit_history_changed(&mut self) {
        self.emit_plot_event(PlotEvent::HistoryChanged {
            undo_len: self.history.undo_len(),
            redo_len: self.history.redo_len(),
        });
    }
}
