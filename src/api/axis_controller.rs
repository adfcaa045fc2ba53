use tracing::debug;

use crate::core::{AutoscaleVariant, AxisId, PixelPoint, Range};
use crate::error::AxisResult;
use crate::extensions::PlotEvent;

use super::XyPlot;

impl XyPlot {
    /// Commits an explicit range on one axis.
    ///
    /// Equal bounds are split around the value; log axes clamp non-positive
    /// bounds. Returns the range actually stored.
    pub fn set_range(&mut self, id: AxisId, lower: f64, upper: f64) -> AxisResult<Range> {
        let range = self.axis_mut(id)?.set_range(lower, upper)?;
        self.flush_range_changes();
        Ok(range)
    }

    pub fn set_log_scale(&mut self, id: AxisId, enabled: bool) -> AxisResult<()> {
        if self.axis_mut(id)?.set_log_scale(enabled) {
            self.emit_plot_event(PlotEvent::LogScaleChanged { axis: id, enabled });
            self.autoscale_axis(id, false)?;
            self.flush_range_changes();
        }
        Ok(())
    }

    /// Flips display direction; the stored bounds are swapped to match.
    pub fn set_inverted(&mut self, id: AxisId, inverted: bool) -> AxisResult<()> {
        if self.axis_mut(id)?.set_inverted(inverted) {
            self.emit_plot_event(PlotEvent::InvertedChanged { axis: id, inverted });
            self.flush_range_changes();
        }
        Ok(())
    }

    /// Enables or disables autoscale; enabling it rescales right away against
    /// the last known data range.
    pub fn set_auto_scale(&mut self, id: AxisId, enabled: bool) -> AxisResult<()> {
        let axis = self.axis_mut(id)?;
        if axis.is_auto_scale() == enabled {
            return Ok(());
        }
        axis.set_auto_scale(enabled);
        self.emit_plot_event(PlotEvent::AutoScaleChanged { axis: id, enabled });
        if enabled {
            self.autoscale_axis(id, false)?;
        }
        Ok(())
    }

    pub fn set_auto_scale_threshold(&mut self, id: AxisId, threshold: f64) -> AxisResult<()> {
        self.axis_mut(id)?.set_auto_scale_threshold(threshold)
    }

    pub fn set_autoscale_variant(&mut self, id: AxisId, variant: AutoscaleVariant) -> AxisResult<()> {
        self.axis_mut(id)?.set_autoscale_variant(variant);
        Ok(())
    }

    /// Updates the pixel length after a host layout pass.
    pub fn set_axis_pixel_length(&mut self, id: AxisId, pixel_length: i32) -> AxisResult<()> {
        self.axis_mut(id)?.set_pixel_length(pixel_length)
    }

    pub fn set_axis_margin(&mut self, id: AxisId, margin: i32) -> AxisResult<()> {
        self.axis_mut(id)?.set_margin(margin)
    }

    /// Zooms one axis around `center`; see
    /// [`crate::core::AxisRangeController::zoom_around_point`].
    pub fn zoom_axis(&mut self, id: AxisId, center: f64, factor: f64) -> AxisResult<bool> {
        let changed = self.axis_mut(id)?.zoom_around_point(center, factor);
        self.flush_range_changes();
        Ok(changed)
    }

    /// Shifts one axis so that `from_value` moves to where `to_value` is.
    ///
    /// Returns `false` when the shift would leave the representable domain.
    pub fn pan_axis(&mut self, id: AxisId, from_value: f64, to_value: f64) -> AxisResult<bool> {
        let axis = self.axis_mut(id)?;
        let baseline = axis.range();
        let out_of_bounds = axis.pan_by(baseline, from_value, to_value);
        if out_of_bounds {
            debug!(axis = %id, from_value, to_value, "programmatic pan out of bounds");
        }
        self.flush_range_changes();
        Ok(!out_of_bounds)
    }

    pub fn value_at_pixel(&self, id: AxisId, pixel: f64) -> AxisResult<f64> {
        Ok(self.axis_ref(id)?.value_at_pixel(pixel, false))
    }

    pub fn value_at_point(&self, id: AxisId, point: PixelPoint) -> AxisResult<f64> {
        Ok(self.axis_ref(id)?.value_at_point(point))
    }

    pub fn pixel_at_value(&self, id: AxisId, value: f64) -> AxisResult<f64> {
        Ok(self.axis_ref(id)?.pixel_at_value(value, false))
    }

    /// Axes whose tick layout must be recomputed.
    pub fn layout_dirty_axes(&self) -> impl Iterator<Item = AxisId> + '_ {
        self.axes
            .iter()
            .filter(|(_, axis)| axis.is_layout_dirty())
            .map(|(id, _)| *id)
    }

    /// Acknowledges a host layout pass over all axes.
    pub fn clear_layout_dirty(&mut self) {
        for axis in self.axes.values_mut() {
            axis.clear_layout_dirty();
        }
    }
}
