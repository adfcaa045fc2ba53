use crate::error::{AxisError, AxisResult};
use crate::extensions::{PlotContext, PlotEvent, PlotObserver};

use super::XyPlot;

impl XyPlot {
    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn PlotObserver>) -> AxisResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(AxisError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(AxisError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    #[must_use]
    pub fn plot_context(&self) -> PlotContext {
        PlotContext {
            gesture_type: self.plot_gesture.gesture_type(),
            gesture_armed: self.is_gesture_armed(),
            axis_count: self.axes.len(),
            undo_len: self.history.undo_len(),
            redo_len: self.history.redo_len(),
        }
    }

    pub(super) fn emit_plot_event(&mut self, event: PlotEvent) {
        let context = self.plot_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }

    /// Turns queued axis range changes into `RangeChanged` events.
    pub(super) fn flush_range_changes(&mut self) {
        let mut events = Vec::new();
        for (id, axis) in &mut self.axes {
            for change in axis.drain_range_changes() {
                events.push(PlotEvent::RangeChanged {
                    axis: *id,
                    old: change.old,
                    new: change.new,
                });
            }
        }
        for event in events {
            self.emit_plot_event(event);
        }
    }
}
