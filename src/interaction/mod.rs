mod axis_gesture;
mod gesture;
mod plot_gesture;
mod zoom_repeat;
mod zoom_type;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{AxisId, AxisRangeController, PixelPoint, Range};

pub use axis_gesture::AxisGestureCoordinator;
pub use gesture::{
    CapturedRanges, GestureScope, GestureSignal, GestureSignals, GestureState, Modifiers,
    PointerButton, classify_dynamic_zoom,
};
pub use plot_gesture::PlotGestureCoordinator;
pub use zoom_repeat::{DEFAULT_ZOOM_REPEAT_INTERVAL, ScheduledZoom, ZoomRepeatSchedule};
pub use zoom_type::{GestureFlags, ZoomDirection, ZoomGestureType, ZoomStep};

/// Default zoom step applied per press-and-hold tick.
pub const DEFAULT_ZOOM_RATIO: f64 = 0.1;

/// Default dead zone, in pixels, before a dynamic zoom picks a direction.
pub const DEFAULT_DYNAMIC_ZOOM_THRESHOLD_PX: i32 = 30;

/// Tuning shared by the plot and axis gesture coordinators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSettings {
    pub zoom_ratio: f64,
    pub zoom_repeat_interval: Duration,
    pub dynamic_zoom_threshold_px: i32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            zoom_ratio: DEFAULT_ZOOM_RATIO,
            zoom_repeat_interval: DEFAULT_ZOOM_REPEAT_INTERVAL,
            dynamic_zoom_threshold_px: DEFAULT_DYNAMIC_ZOOM_THRESHOLD_PX,
        }
    }
}

/// Commits the values under `start` and `end`, read against `baseline`.
///
/// The committed bounds follow the ordering of `baseline`, so inverted axes
/// stay inverted. A drag with no extent along the axis commits nothing.
pub(crate) fn commit_interval_zoom(
    axis: &mut AxisRangeController,
    baseline: Range,
    start: PixelPoint,
    end: PixelPoint,
) -> bool {
    let orientation = axis.orientation();
    let (p1, p2) = (start.along(orientation), end.along(orientation));
    if p1 == p2 {
        trace!(pixel = p1, "skipping interval zoom without extent");
        return false;
    }
    let t1 = axis.value_at_pixel_in(baseline, f64::from(p1), false);
    let t2 = axis.value_at_pixel_in(baseline, f64::from(p2), false);
    let (min, max) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
    let target = if baseline.is_min_bigger() {
        Range::new(max, min)
    } else {
        Range::new(min, max)
    };
    axis.restore_range(target)
}

/// Pans `axis` so the value under the press point follows the pointer.
///
/// Values are read against the range captured at pointer-down, so each step
/// is relative to the drag origin rather than to the previous step.
pub(crate) fn pan_from_baseline(
    axis: &mut AxisRangeController,
    state: &GestureState,
    id: AxisId,
    pixel: PixelPoint,
) -> bool {
    let Some(baseline) = state.captured_range(id) else {
        return false;
    };
    let orientation = axis.orientation();
    let from = axis.value_at_pixel_in(baseline, f64::from(state.start.along(orientation)), false);
    let to = axis.value_at_pixel_in(baseline, f64::from(pixel.along(orientation)), false);
    if axis.pan_by(baseline, from, to) {
        debug!(axis = %id, from, to, "pan step out of representable range, ignored");
        return false;
    }
    true
}
