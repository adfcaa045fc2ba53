use smallvec::smallvec;
use tracing::{debug, trace};

use crate::core::{AxisId, AxisRangeController, Orientation, PixelPoint};

use super::gesture::{
    GestureScope, GestureSignal, GestureSignals, GestureState, Modifiers, PointerButton,
    classify_dynamic_zoom,
};
use super::zoom_repeat::{ScheduledZoom, ZoomRepeatSchedule};
use super::{GestureSettings, ZoomGestureType, commit_interval_zoom, pan_from_baseline};

/// Gesture state machine for drags on a single axis ruler.
///
/// Dynamic zoom is classified once, on the first move that leaves the dead
/// zone around the press point, and keeps that classification until release.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGestureCoordinator {
    axis: AxisId,
    selected: ZoomGestureType,
    previous: ZoomGestureType,
    state: Option<GestureState>,
    dynamic_locked: bool,
    repeat: ZoomRepeatSchedule,
    settings: GestureSettings,
}

impl AxisGestureCoordinator {
    #[must_use]
    pub fn new(axis: AxisId, settings: GestureSettings) -> Self {
        Self {
            axis,
            selected: ZoomGestureType::None,
            previous: ZoomGestureType::None,
            state: None,
            dynamic_locked: false,
            repeat: ZoomRepeatSchedule::new(settings.zoom_repeat_interval),
            settings,
        }
    }

    #[must_use]
    pub fn axis_id(&self) -> AxisId {
        self.axis
    }

    /// Gesture type selected by the host.
    #[must_use]
    pub fn gesture_type(&self) -> ZoomGestureType {
        self.selected
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state.is_some()
    }

    #[must_use]
    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> GestureSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: GestureSettings) {
        self.settings = settings;
        self.repeat.set_interval(settings.zoom_repeat_interval);
    }

    /// Selects the gesture type and asks the host for the matching cursor.
    ///
    /// A type that is not valid for this axis' orientation requests the
    /// plain cursor and will not arm on primary-button presses. During a
    /// middle-button pan the new type is also the one restored on release.
    pub fn set_gesture_type(
        &mut self,
        gesture: ZoomGestureType,
        orientation: Orientation,
    ) -> GestureSignals {
        if self.is_middle_button_armed() {
            self.previous = gesture;
        }
        self.selected = gesture;
        let cursor = if gesture.is_valid_on(orientation) {
            gesture
        } else {
            ZoomGestureType::None
        };
        smallvec![GestureSignal::CursorRequested {
            scope: self.scope(),
            gesture: cursor,
        }]
    }

    pub fn pointer_down(
        &mut self,
        axis: &mut AxisRangeController,
        pixel: PixelPoint,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> GestureSignals {
        let mut signals = GestureSignals::new();
        if self.state.is_some() {
            trace!(axis = %self.axis, "ignoring pointer down while a gesture is armed");
            return signals;
        }

        let gesture = match button {
            PointerButton::Middle => ZoomGestureType::Panning,
            PointerButton::Primary if self.selected.is_valid_on(axis.orientation()) => {
                self.selected
            }
            _ => return signals,
        };
        self.previous = self.selected;
        if button == PointerButton::Middle {
            self.selected = ZoomGestureType::Panning;
        }

        let captured = smallvec![(self.axis, axis.range())];
        self.state = Some(GestureState::new(
            gesture, button, modifiers, pixel, captured,
        ));
        self.dynamic_locked = false;
        debug!(axis = %self.axis, ?gesture, x = pixel.x, y = pixel.y, "axis gesture armed");

        signals.push(GestureSignal::Started {
            scope: self.scope(),
            gesture,
        });
        if gesture == ZoomGestureType::Panning {
            signals.push(GestureSignal::CursorRequested {
                scope: self.scope(),
                gesture,
            });
        }
        if gesture.zoom_step().is_some() {
            signals.push(GestureSignal::ScheduleZoomRepeat(
                self.repeat.start(self.scope()),
            ));
        }
        signals
    }

    pub fn pointer_move(
        &mut self,
        axis: &mut AxisRangeController,
        pixel: PixelPoint,
    ) -> GestureSignals {
        let mut signals = GestureSignals::new();
        let scope = self.scope();
        let threshold = self.settings.dynamic_zoom_threshold_px;
        let Some(state) = self.state.as_mut() else {
            return signals;
        };

        match state.gesture {
            ZoomGestureType::DynamicZoom if !self.dynamic_locked => {
                state.end = Some(pixel);
                let dx = (i64::from(pixel.x) - i64::from(state.start.x)).abs();
                let dy = (i64::from(pixel.y) - i64::from(state.start.y)).abs();
                if dx.max(dy) >= i64::from(threshold) {
                    state.gesture = classify_dynamic_zoom(state.start, pixel, threshold);
                    self.dynamic_locked = true;
                    trace!(axis = %self.axis, gesture = ?state.gesture, "dynamic zoom classified");
                    signals.push(GestureSignal::CursorRequested {
                        scope,
                        gesture: state.gesture,
                    });
                }
                signals.push(GestureSignal::RubberbandPreview {
                    scope,
                    gesture: state.gesture,
                    start: state.start,
                    end: pixel,
                });
            }
            gesture if gesture.is_interval_zoom() => {
                state.end = Some(pixel);
                signals.push(GestureSignal::RubberbandPreview {
                    scope,
                    gesture,
                    start: state.start,
                    end: pixel,
                });
            }
            ZoomGestureType::Panning => {
                state.end = Some(pixel);
                pan_from_baseline(axis, state, self.axis, pixel);
            }
            _ => {}
        }
        signals
    }

    pub fn pointer_up(
        &mut self,
        axis: &mut AxisRangeController,
        pixel: PixelPoint,
        button: PointerButton,
    ) -> GestureSignals {
        let mut signals = GestureSignals::new();
        match self.state.as_ref() {
            Some(state) if state.button == button => {}
            _ => return signals,
        }
        let Some(mut state) = self.state.take() else {
            return signals;
        };
        self.repeat.cancel();

        let gesture = state.gesture;
        match gesture {
            gesture if gesture.is_interval_zoom() => {
                if let Some(end) = state.end {
                    let baseline = state.captured_range(self.axis).unwrap_or(axis.range());
                    let commits = gesture == ZoomGestureType::DynamicZoom
                        || gesture.commits_on(axis.orientation());
                    if commits {
                        commit_interval_zoom(axis, baseline, state.start, end);
                    }
                }
            }
            ZoomGestureType::Panning => {
                state.end = Some(pixel);
                pan_from_baseline(axis, &state, self.axis, pixel);
            }
            gesture => {
                if let Some(step) = gesture.zoom_step() {
                    let center = axis.value_at_point(state.start);
                    axis.zoom_around_point(center, step.factor(self.settings.zoom_ratio));
                }
            }
        }
        debug!(axis = %self.axis, ?gesture, "axis gesture committed");

        signals.push(GestureSignal::Committed {
            scope: self.scope(),
            gesture,
            before: state.captured,
        });
        self.restore_after_middle_button(button, axis.orientation(), &mut signals);
        signals
    }

    /// Leaving the axis ends a press-and-hold zoom as if released.
    pub fn pointer_exit(&mut self, axis: &mut AxisRangeController) -> GestureSignals {
        let Some(state) = self.state.as_ref() else {
            return GestureSignals::new();
        };
        if state.gesture.zoom_step().is_none() {
            return GestureSignals::new();
        }
        let (last, button) = (state.end.unwrap_or(state.start), state.button);
        self.pointer_up(axis, last, button)
    }

    /// Runs one press-and-hold zoom step; returns the repost when still armed.
    pub fn on_zoom_repeat(
        &mut self,
        axis: &mut AxisRangeController,
        scheduled: ScheduledZoom,
    ) -> GestureSignals {
        let mut signals = GestureSignals::new();
        if !self.repeat.accepts(scheduled) {
            return signals;
        }
        let Some(state) = self.state.as_ref() else {
            self.repeat.cancel();
            return signals;
        };
        let Some(step) = state.gesture.zoom_step() else {
            return signals;
        };
        let center = axis.value_at_point(state.start);
        axis.zoom_around_point(center, step.factor(self.settings.zoom_ratio));
        trace!(axis = %self.axis, center, "zoom repeat step");
        signals.push(GestureSignal::ScheduleZoomRepeat(
            self.repeat.repost(scheduled),
        ));
        signals
    }

    /// Drops the armed gesture, restoring the captured range after a pan.
    pub fn cancel(&mut self, axis: &mut AxisRangeController) -> GestureSignals {
        let mut signals = GestureSignals::new();
        let Some(state) = self.state.take() else {
            return signals;
        };
        self.repeat.cancel();
        if state.gesture == ZoomGestureType::Panning {
            if let Some(baseline) = state.captured_range(self.axis) {
                axis.restore_range(baseline);
            }
        }
        debug!(axis = %self.axis, gesture = ?state.gesture, "axis gesture cancelled");
        signals.push(GestureSignal::Cancelled {
            scope: self.scope(),
            gesture: state.gesture,
        });
        self.restore_after_middle_button(state.button, axis.orientation(), &mut signals);
        signals
    }

    fn is_middle_button_armed(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.button == PointerButton::Middle)
    }

    fn restore_after_middle_button(
        &mut self,
        button: PointerButton,
        orientation: Orientation,
        signals: &mut GestureSignals,
    ) {
        if button == PointerButton::Middle && self.previous != ZoomGestureType::Panning {
            signals.extend(self.set_gesture_type(self.previous, orientation));
        }
    }

    fn scope(&self) -> GestureScope {
        GestureScope::Axis(self.axis)
    }
}
