use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisId, PixelPoint, Range};

use super::ZoomGestureType;
use super::zoom_repeat::ScheduledZoom;

/// Pointer button that started or ended a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    /// Main button; starts the selected gesture.
    Primary,
    /// Wheel/middle button; always starts a temporary pan.
    Middle,
    Secondary,
}

/// Keyboard modifiers held when a gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

/// Where a gesture is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureScope {
    /// Drag inside the plot area, driving every axis.
    Plot,
    /// Drag on one axis ruler.
    Axis(AxisId),
}

pub type CapturedRanges = SmallVec<[(AxisId, Range); 4]>;

/// Transient state of one armed pointer drag.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    pub(crate) gesture: ZoomGestureType,
    pub(crate) button: PointerButton,
    pub(crate) modifiers: Modifiers,
    pub(crate) start: PixelPoint,
    pub(crate) end: Option<PixelPoint>,
    pub(crate) captured: CapturedRanges,
}

impl GestureState {
    pub(crate) fn new(
        gesture: ZoomGestureType,
        button: PointerButton,
        modifiers: Modifiers,
        start: PixelPoint,
        captured: CapturedRanges,
    ) -> Self {
        Self {
            gesture,
            button,
            modifiers,
            start,
            end: None,
            captured,
        }
    }

    /// Gesture actually running; for dynamic zoom this is its current classification.
    #[must_use]
    pub fn gesture(&self) -> ZoomGestureType {
        self.gesture
    }

    #[must_use]
    pub fn button(&self) -> PointerButton {
        self.button
    }

    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[must_use]
    pub fn start(&self) -> PixelPoint {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<PixelPoint> {
        self.end
    }

    /// Ranges of the participating axes captured at pointer-down.
    #[must_use]
    pub fn captured(&self) -> &[(AxisId, Range)] {
        &self.captured
    }

    #[must_use]
    pub fn captured_range(&self, axis: AxisId) -> Option<Range> {
        self.captured
            .iter()
            .find(|(id, _)| *id == axis)
            .map(|(_, range)| *range)
    }
}

/// Side effect requested by a coordinator, translated into host events by the plot.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureSignal {
    Started {
        scope: GestureScope,
        gesture: ZoomGestureType,
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
    ScheduleZoomRepeat(ScheduledZoom),
    Committed {
        scope: GestureScope,
        gesture: ZoomGestureType,
        before: CapturedRanges,
    },
    Cancelled {
        scope: GestureScope,
        gesture: ZoomGestureType,
    },
}

pub type GestureSignals = SmallVec<[GestureSignal; 4]>;

/// Classifies a dynamic-zoom drag by which direction dominates.
///
/// A drag that stays within `threshold_px` horizontally is a vertical zoom,
/// one that stays within it vertically is a horizontal zoom, anything else is
/// a rubberband zoom.
#[must_use]
pub fn classify_dynamic_zoom(
    start: PixelPoint,
    current: PixelPoint,
    threshold_px: i32,
) -> ZoomGestureType {
    let dx = (i64::from(current.x) - i64::from(start.x)).abs();
    let dy = (i64::from(current.y) - i64::from(start.y)).abs();
    let threshold = i64::from(threshold_px);
    if dx < threshold {
        ZoomGestureType::VerticalZoom
    } else if dy < threshold {
        ZoomGestureType::HorizontalZoom
    } else {
        ZoomGestureType::RubberbandZoom
    }
}

#[cfg(test)]
mod tests {
    use super::classify_dynamic_zoom;
    use crate::core::PixelPoint;
    use crate::interaction::ZoomGestureType;

    #[test]
    fn dynamic_zoom_classification_uses_dominant_direction() {
        let start = PixelPoint::new(100, 100);
        assert_eq!(
            classify_dynamic_zoom(start, PixelPoint::new(110, 300), 30),
            ZoomGestureType::VerticalZoom
        );
        assert_eq!(
            classify_dynamic_zoom(start, PixelPoint::new(300, 110), 30),
            ZoomGestureType::HorizontalZoom
        );
        assert_eq!(
            classify_dynamic_zoom(start, PixelPoint::new(300, 300), 30),
            ZoomGestureType::RubberbandZoom
        );
    }
}
