use serde::{Deserialize, Serialize};

use crate::core::{AxisId, PixelPoint, Range};
use crate::interaction::{GestureScope, ZoomGestureType};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotContext {
    pub gesture_type: ZoomGestureType,
    pub gesture_armed: bool,
    pub axis_count: usize,
    pub undo_len: usize,
    pub redo_len: usize,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlotEvent {
    /// Emitted once per committed range that differs from the previous one.
    RangeChanged {
        axis: AxisId,
        old: Range,
        new: Range,
    },
    RubberbandPreview {
        scope: GestureScope,
        gesture: ZoomGestureType,
        start: PixelPoint,
        end: PixelPoint,
    },
    CursorRequested {
        scope: GestureScope,
        gesture: ZoomGestureType,
    },
    GestureStarted {
        scope: GestureScope,
        gesture: ZoomGestureType,
    },
    GestureCommitted {
        scope: GestureScope,
        gesture: ZoomGestureType,
    },
    GestureCancelled {
        scope: GestureScope,
        gesture: ZoomGestureType,
    },
    AutoScaleChanged {
        axis: AxisId,
        enabled: bool,
    },
    LogScaleChanged {
        axis: AxisId,
        enabled: bool,
    },
    InvertedChanged {
        axis: AxisId,
        inverted: bool,
    },
    HistoryChanged {
        undo_len: usize,
        redo_len: usize,
    },
}

/// Listener interface for plot notifications.
///
/// Observers see events after the plot state has been updated and cannot
/// mutate the plot from inside the hook.
pub trait PlotObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PlotEvent, context: PlotContext);
}
