use tracing::{debug, trace};

use crate::core::{AxisId, DataRangeAccumulator, Range};
use crate::error::AxisResult;

use super::XyPlot;

impl XyPlot {
    /// Last data range reported for `id`.
    #[must_use]
    pub fn data_range(&self, id: AxisId) -> Option<Range> {
        self.data_ranges.get(&id).copied()
    }

    /// Records the data range of `id` and autoscales the axis when enabled.
    ///
    /// While a gesture is armed the range is only stored and the autoscale
    /// runs when the gesture commits or is cancelled. Returns `true` when the
    /// axis range changed now.
    pub fn notify_data_range_candidate(&mut self, id: AxisId, data_range: Range) -> AxisResult<bool> {
        self.axis_ref(id)?;
        if !data_range.is_finite() {
            trace!(axis = %id, "ignoring non-finite data range candidate");
            return Ok(false);
        }
        self.data_ranges.insert(id, data_range);
        if self.is_gesture_armed() {
            trace!(axis = %id, "deferring autoscale while a gesture is armed");
            self.deferred_autoscale.insert(id);
            return Ok(false);
        }
        let changed = self.axis_mut(id)?.notify_data_range_candidate(data_range);
        self.flush_range_changes();
        Ok(changed)
    }

    /// Unions the data ranges of every trace drawn against `id`.
    ///
    /// Non-finite trace ranges are skipped; when nothing remains the stored
    /// data range is cleared and `false` is returned.
    pub fn notify_trace_ranges<I>(&mut self, id: AxisId, traces: I) -> AxisResult<bool>
    where
        I: IntoIterator<Item = Range>,
    {
        self.axis_ref(id)?;
        match traces.into_iter().collect::<DataRangeAccumulator>().finish() {
            Some(union) => self.notify_data_range_candidate(id, union),
            None => {
                self.data_ranges.shift_remove(&id);
                Ok(false)
            }
        }
    }

    /// Derives the data range of `id` from raw samples.
    ///
    /// Log axes ignore samples `<= 0`.
    pub fn notify_samples(&mut self, id: AxisId, samples: &[f64]) -> AxisResult<bool> {
        let positive_only = self.axis_ref(id)?.is_log_scale();
        match Range::from_samples(samples.iter().copied(), positive_only) {
            Some(range) => self.notify_data_range_candidate(id, range),
            None => {
                self.data_ranges.shift_remove(&id);
                Ok(false)
            }
        }
    }

    /// Autoscales one axis against its stored data range.
    ///
    /// Without `force` nothing happens unless autoscale is enabled.
    pub fn autoscale_axis(&mut self, id: AxisId, force: bool) -> AxisResult<bool> {
        let data_range = self.data_ranges.get(&id).copied();
        let changed = self.axis_mut(id)?.perform_autoscale(data_range, force);
        self.flush_range_changes();
        Ok(changed)
    }

    /// Autoscales every axis; skipped while a gesture is armed unless forced.
    ///
    /// Returns how many axes changed range.
    pub fn autoscale_all(&mut self, force: bool) -> usize {
        if !force && self.is_gesture_armed() {
            debug!("skipping autoscale while a gesture is armed");
            return 0;
        }
        let mut changed = 0;
        for (id, axis) in &mut self.axes {
            let data_range = self.data_ranges.get(id).copied();
            if axis.perform_autoscale(data_range, force) {
                changed += 1;
            }
        }
        self.deferred_autoscale.clear();
        self.flush_range_changes();
        changed
    }

    /// Autoscales the axes whose data arrived during the gesture that just ended.
    pub(super) fn run_deferred_autoscale(&mut self) {
        if self.deferred_autoscale.is_empty() || self.is_gesture_armed() {
            return;
        }
        for id in std::mem::take(&mut self.deferred_autoscale) {
            let data_range = self.data_ranges.get(&id).copied();
            let Some(axis) = self.axes.get_mut(&id) else {
                continue;
            };
            if axis.perform_autoscale(data_range, false) {
                debug!(axis = %id, "applied autoscale deferred by gesture");
            }
        }
        self.flush_range_changes();
    }
}
