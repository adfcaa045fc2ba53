use tracing::{debug, trace};

use crate::core::{AxisId, AxisRangeController, PixelPoint};
use crate::error::{AxisError, AxisResult};
use crate::extensions::PlotEvent;
use crate::interaction::{
    AxisGestureCoordinator, GestureScope, GestureSignal, GestureSignals, Modifiers,
    PointerButton, ScheduledZoom, ZoomGestureType,
};

use super::XyPlot;

impl XyPlot {
    /// Gesture type selected for the plot area and every axis ruler.
    #[must_use]
    pub fn gesture_type(&self) -> ZoomGestureType {
        self.plot_gesture.gesture_type()
    }

    pub fn set_gesture_type(&mut self, gesture: ZoomGestureType) {
        let mut signals = self.plot_gesture.set_gesture_type(gesture);
        for (id, coordinator) in &mut self.axis_gestures {
            if let Some(axis) = self.axes.get(id) {
                signals.extend(coordinator.set_gesture_type(gesture, axis.orientation()));
            }
        }
        self.dispatch_signals(signals);
    }

    /// Whether a plot or axis gesture is between pointer-down and release.
    #[must_use]
    pub fn is_gesture_armed(&self) -> bool {
        self.plot_gesture.is_armed() || self.axis_gestures.values().any(|c| c.is_armed())
    }

    /// Pointer pressed inside the plot area.
    ///
    /// Returns the zoom step the host must schedule for press-and-hold zooms.
    pub fn plot_pointer_down(
        &mut self,
        pixel: PixelPoint,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Option<ScheduledZoom> {
        if self.is_gesture_armed() {
            trace!("plot pointer down ignored while a gesture is armed");
            return None;
        }
        let signals = self
            .plot_gesture
            .pointer_down(&self.axes, pixel, button, modifiers);
        self.dispatch_signals(signals)
    }

    pub fn plot_pointer_move(&mut self, pixel: PixelPoint) {
        let signals = self.plot_gesture.pointer_move(&mut self.axes, pixel);
        self.dispatch_signals(signals);
    }

    pub fn plot_pointer_up(&mut self, pixel: PixelPoint, button: PointerButton) {
        let signals = self.plot_gesture.pointer_up(&mut self.axes, pixel, button);
        self.dispatch_signals(signals);
    }

    pub fn plot_pointer_exit(&mut self) {
        let signals = self.plot_gesture.pointer_exit(&mut self.axes);
        self.dispatch_signals(signals);
    }

    /// Pointer pressed on the ruler of axis `id`.
    pub fn axis_pointer_down(
        &mut self,
        id: AxisId,
        pixel: PixelPoint,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> AxisResult<Option<ScheduledZoom>> {
        if self.is_gesture_armed() {
            trace!(axis = %id, "axis pointer down ignored while a gesture is armed");
            return Ok(None);
        }
        let (coordinator, axis) = self.axis_gesture_parts(id)?;
        let signals = coordinator.pointer_down(axis, pixel, button, modifiers);
        Ok(self.dispatch_signals(signals))
    }

    pub fn axis_pointer_move(&mut self, id: AxisId, pixel: PixelPoint) -> AxisResult<()> {
        let (coordinator, axis) = self.axis_gesture_parts(id)?;
        let signals = coordinator.pointer_move(axis, pixel);
        self.dispatch_signals(signals);
        Ok(())
    }

    pub fn axis_pointer_up(
        &mut self,
        id: AxisId,
        pixel: PixelPoint,
        button: PointerButton,
    ) -> AxisResult<()> {
        let (coordinator, axis) = self.axis_gesture_parts(id)?;
        let signals = coordinator.pointer_up(axis, pixel, button);
        self.dispatch_signals(signals);
        Ok(())
    }

    pub fn axis_pointer_exit(&mut self, id: AxisId) -> AxisResult<()> {
        let (coordinator, axis) = self.axis_gesture_parts(id)?;
        let signals = coordinator.pointer_exit(axis);
        self.dispatch_signals(signals);
        Ok(())
    }

    /// Runs a press-and-hold zoom step the host scheduled earlier.
    ///
    /// Returns the next step to schedule, or `None` once the gesture ended.
    pub fn on_zoom_repeat(&mut self, scheduled: ScheduledZoom) -> Option<ScheduledZoom> {
        let signals = match scheduled.scope {
            GestureScope::Plot => self.plot_gesture.on_zoom_repeat(&mut self.axes, scheduled),
            GestureScope::Axis(id) => match self.axis_gesture_parts(id) {
                Ok((coordinator, axis)) => coordinator.on_zoom_repeat(axis, scheduled),
                Err(_) => return None,
            },
        };
        self.dispatch_signals(signals)
    }

    /// Aborts any armed gesture; a pan in progress snaps back to where it started.
    pub fn cancel_gesture(&mut self) {
        let mut signals = self.plot_gesture.cancel(&mut self.axes);
        for (id, coordinator) in &mut self.axis_gestures {
            if let Some(axis) = self.axes.get_mut(id) {
                signals.extend(coordinator.cancel(axis));
            }
        }
        self.dispatch_signals(signals);
    }

    fn axis_gesture_parts(
        &mut self,
        id: AxisId,
    ) -> AxisResult<(&mut AxisGestureCoordinator, &mut AxisRangeController)> {
        let unknown = || AxisError::InvalidData(format!("unknown axis `{id}`"));
        let coordinator = self.axis_gestures.get_mut(&id).ok_or_else(unknown)?;
        let axis = self.axes.get_mut(&id).ok_or_else(unknown)?;
        Ok((coordinator, axis))
    }

    /// Publishes range changes and coordinator signals to observers.
    fn dispatch_signals(&mut self, signals: GestureSignals) -> Option<ScheduledZoom> {
        self.flush_range_changes();
        let mut scheduled = None;
        for signal in signals {
            match signal {
                GestureSignal::Started { scope, gesture } => {
                    self.emit_plot_event(PlotEvent::GestureStarted { scope, gesture });
                }
                GestureSignal::RubberbandPreview {
                    scope,
                    gesture,
                    start,
                    end,
                } => {
                    self.emit_plot_event(PlotEvent::RubberbandPreview {
                        scope,
                        gesture,
                        start,
                        end,
                    });
                }
                GestureSignal::CursorRequested { scope, gesture } => {
                    self.emit_plot_event(PlotEvent::CursorRequested { scope, gesture });
                }
                GestureSignal::ScheduleZoomRepeat(next) => scheduled = Some(next),
                GestureSignal::Committed {
                    scope,
                    gesture,
                    before,
                } => {
                    debug!(?scope, ?gesture, "gesture committed");
                    self.emit_plot_event(PlotEvent::GestureCommitted { scope, gesture });
                    self.record_gesture_commit(gesture, before);
                }
                GestureSignal::Cancelled { scope, gesture } => {
                    self.emit_plot_event(PlotEvent::GestureCancelled { scope, gesture });
                }
            }
        }
        self.run_deferred_autoscale();
        scheduled
    }
}
