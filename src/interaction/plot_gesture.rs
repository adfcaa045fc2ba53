use tracing::{debug, trace};

use crate::core::{AxisMap, PixelPoint};

use super::gesture::{
    CapturedRanges, GestureScope, GestureSignal, GestureSignals, GestureState, Modifiers,
    PointerButton, classify_dynamic_zoom,
};
use super::zoom_repeat::{ScheduledZoom, ZoomRepeatSchedule};
use super::{GestureSettings, ZoomGestureType, commit_interval_zoom, pan_from_baseline};

/// Gesture state machine for drags inside the plot area.
///
/// Every axis of the plot participates. Dynamic zoom is reclassified on each
/// move from the press point, so the drag may switch between horizontal,
/// vertical and rubberband zoom until it is released.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotGestureCoordinator {
    selected: ZoomGestureType,
    previous: ZoomGestureType,
    state: Option<GestureState>,
    dynamic: bool,
    repeat: ZoomRepeatSchedule,
    settings: GestureSettings,
}

impl Default for PlotGestureCoordinator {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

impl PlotGestureCoordinator {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            selected: ZoomGestureType::None,
            previous: ZoomGestureType::None,
            state: None,
            dynamic: false,
            repeat: ZoomRepeatSchedule::new(settings.zoom_repeat_interval),
            settings,
        }
    }

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

    /// Selects the gesture type; during a middle-button pan it is also the
    /// type restored on release.
    pub fn set_gesture_type(&mut self, gesture: ZoomGestureType) -> GestureSignals {
        if self.is_middle_button_armed() {
            self.previous = gesture;
        }
        self.selected = gesture;
        let mut signals = GestureSignals::new();
        signals.push(GestureSignal::CursorRequested {
            scope: GestureScope::Plot,
            gesture,
        });
        signals
    }

    pub fn pointer_down(
        &mut self,
        axes: &AxisMap,
        pixel: PixelPoint,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> GestureSignals {
        let mut signals = GestureSignals::new();
        if self.state.is_some() {
            trace!("ignoring plot pointer down while a gesture is armed");
            return signals;
        }

        let gesture = match button {
            PointerButton::Middle => ZoomGestureType::Panning,
            PointerButton::Primary if self.selected != ZoomGestureType::None => self.selected,
            _ => return signals,
        };
        self.previous = self.selected;
        if button == PointerButton::Middle {
            self.selected = ZoomGestureType::Panning;
        }

        let captured: CapturedRanges = axes.iter().map(|(id, axis)| (*id, axis.range())).collect();
        self.state = Some(GestureState::new(
            gesture, button, modifiers, pixel, captured,
        ));
        self.dynamic = gesture == ZoomGestureType::DynamicZoom;
        debug!(?gesture, x = pixel.x, y = pixel.y, axes = axes.len(), "plot gesture armed");

        signals.push(GestureSignal::Started {
            scope: GestureScope::Plot,
            gesture,
        });
        if gesture == ZoomGestureType::Panning {
            signals.push(GestureSignal::CursorRequested {
                scope: GestureScope::Plot,
                gesture,
            });
        }
        if gesture.zoom_step().is_some() {
            signals.push(GestureSignal::ScheduleZoomRepeat(
                self.repeat.start(GestureScope::Plot),
            ));
        }
        signals
    }

    pub fn pointer_move(&mut self, axes: &mut AxisMap, pixel: PixelPoint) -> GestureSignals {
        let mut signals = GestureSignals::new();
        let threshold = self.settings.dynamic_zoom_threshold_px;
        let Some(state) = self.state.as_mut() else {
            return signals;
        };

        if self.dynamic {
            let class = classify_dynamic_zoom(state.start, pixel, threshold);
            if class != state.gesture {
                trace!(from = ?state.gesture, to = ?class, "dynamic zoom reclassified");
                state.gesture = class;
                signals.push(GestureSignal::CursorRequested {
                    scope: GestureScope::Plot,
                    gesture: class,
                });
            }
        }

        match state.gesture {
            gesture if gesture.is_interval_zoom() => {
                state.end = Some(pixel);
                signals.push(GestureSignal::RubberbandPreview {
                    scope: GestureScope::Plot,
                    gesture,
                    start: state.start,
                    end: pixel,
                });
            }
            ZoomGestureType::Panning => {
                state.end = Some(pixel);
                for (id, axis) in axes.iter_mut() {
                    pan_from_baseline(axis, state, *id, pixel);
                }
            }
            _ => {}
        }
        signals
    }

    pub fn pointer_up(
        &mut self,
        axes: &mut AxisMap,
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
        self.dynamic = false;

        let gesture = state.gesture;
        match gesture {
            gesture if gesture.is_interval_zoom() => {
                if let Some(end) = state.end {
                    for (id, axis) in axes.iter_mut() {
                        if !gesture.commits_on(axis.orientation()) {
                            continue;
                        }
                        let baseline = state.captured_range(*id).unwrap_or(axis.range());
                        commit_interval_zoom(axis, baseline, state.start, end);
                    }
                }
            }
            ZoomGestureType::Panning => {
                state.end = Some(pixel);
                for (id, axis) in axes.iter_mut() {
                    pan_from_baseline(axis, &state, *id, pixel);
                }
            }
            gesture => {
                if let Some(step) = gesture.zoom_step() {
                    self.apply_zoom_step(axes, &state, step);
                }
            }
        }
        debug!(?gesture, "plot gesture committed");

        signals.push(GestureSignal::Committed {
            scope: GestureScope::Plot,
            gesture,
            before: state.captured,
        });
        self.restore_after_middle_button(button, &mut signals);
        signals
    }

    /// Leaving the plot area ends a press-and-hold zoom as if released.
    pub fn pointer_exit(&mut self, axes: &mut AxisMap) -> GestureSignals {
        let Some(state) = self.state.as_ref() else {
            return GestureSignals::new();
        };
        if state.gesture.zoom_step().is_none() {
            return GestureSignals::new();
        }
        let (last, button) = (state.end.unwrap_or(state.start), state.button);
        self.pointer_up(axes, last, button)
    }

    pub fn on_zoom_repeat(&mut self, axes: &mut AxisMap, scheduled: ScheduledZoom) -> GestureSignals {
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
        let state = state.clone();
        self.apply_zoom_step(axes, &state, step);
        signals.push(GestureSignal::ScheduleZoomRepeat(
            self.repeat.repost(scheduled),
        ));
        signals
    }

    /// Drops the armed gesture, restoring captured ranges after a pan.
    pub fn cancel(&mut self, axes: &mut AxisMap) -> GestureSignals {
        let mut signals = GestureSignals::new();
        let Some(state) = self.state.take() else {
            return signals;
        };
        self.repeat.cancel();
        self.dynamic = false;
        if state.gesture == ZoomGestureType::Panning {
            for (id, range) in &state.captured {
                if let Some(axis) = axes.get_mut(id) {
                    axis.restore_range(*range);
                }
            }
        }
        debug!(gesture = ?state.gesture, "plot gesture cancelled");
        signals.push(GestureSignal::Cancelled {
            scope: GestureScope::Plot,
            gesture: state.gesture,
        });
        self.restore_after_middle_button(state.button, &mut signals);
        signals
    }

    fn apply_zoom_step(&self, axes: &mut AxisMap, state: &GestureState, step: super::ZoomStep) {
        let factor = step.factor(self.settings.zoom_ratio);
        for (id, axis) in axes.iter_mut() {
            if !step.applies_to(axis.orientation()) {
                continue;
            }
            let center = axis.value_at_point(state.start);
            trace!(axis = %id, center, factor, "plot zoom step");
            axis.zoom_around_point(center, factor);
        }
    }

    fn is_middle_button_armed(&self) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.button == PointerButton::Middle)
    }

    fn restore_after_middle_button(&mut self, button: PointerButton, signals: &mut GestureSignals) {
        if button == PointerButton::Middle && self.previous != ZoomGestureType::Panning {
            signals.extend(self.set_gesture_type(self.previous));
        }
    }
}
