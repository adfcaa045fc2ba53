use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::autoscale::{AutoscaleDecision, AutoscaleEngine, AutoscaleVariant};
use super::log_scale::{
    DEFAULT_LOG_SCALE_MAX, DEFAULT_LOG_SCALE_MIN_FRACTION, clamp_exponent,
    exponents_representable, log10, max_magnitude, pow10,
};
use super::{Orientation, PixelPoint, Range, RangeChange};
use crate::error::{AxisError, AxisResult};

/// Default autoscale threshold, as a fraction of the relevant spread.
pub const DEFAULT_AUTO_SCALE_THRESHOLD: f64 = 0.01;

/// Smallest relative split used to separate a zero-width range (`2^-53`).
const MIN_SPLIT_FRACTION: f64 = f64::EPSILON / 2.0;

/// Owner of one axis' value range.
///
/// Every mutation funnels through a single commit path that keeps the range
/// finite, non-degenerate and, on log axes, strictly positive. Committed
/// changes are queued as [`RangeChange`]s until the host drains them.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRangeController {
    range: Range,
    orientation: Orientation,
    pixel_length: i32,
    margin: i32,
    log_scale: bool,
    inverted: bool,
    auto_scale: bool,
    auto_scale_threshold: f64,
    autoscale_variant: AutoscaleVariant,
    layout_dirty: bool,
    pending_changes: SmallVec<[RangeChange; 4]>,
}

impl AxisRangeController {
    /// Creates a linear axis spanning `(0, 100)` over 100 pixels.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            range: Range::new(0.0, 100.0),
            orientation,
            pixel_length: 100,
            margin: 0,
            log_scale: false,
            inverted: false,
            auto_scale: false,
            auto_scale_threshold: DEFAULT_AUTO_SCALE_THRESHOLD,
            autoscale_variant: AutoscaleVariant::default(),
            layout_dirty: true,
            pending_changes: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.orientation.is_horizontal()
    }

    #[must_use]
    pub fn pixel_length(&self) -> i32 {
        self.pixel_length
    }

    #[must_use]
    pub fn margin(&self) -> i32 {
        self.margin
    }

    #[must_use]
    pub fn is_log_scale(&self) -> bool {
        self.log_scale
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn is_auto_scale(&self) -> bool {
        self.auto_scale
    }

    #[must_use]
    pub fn auto_scale_threshold(&self) -> f64 {
        self.auto_scale_threshold
    }

    #[must_use]
    pub fn autoscale_variant(&self) -> AutoscaleVariant {
        self.autoscale_variant
    }

    /// Whether tick layout must be recomputed since the last acknowledgement.
    #[must_use]
    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    pub fn clear_layout_dirty(&mut self) {
        self.layout_dirty = false;
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.layout_dirty = true;
        }
    }

    pub fn set_pixel_length(&mut self, pixel_length: i32) -> AxisResult<()> {
        if pixel_length <= 0 {
            return Err(AxisError::InvalidData(format!(
                "axis pixel length must be > 0, got {pixel_length}"
            )));
        }
        if self.pixel_length != pixel_length {
            self.pixel_length = pixel_length;
            self.layout_dirty = true;
        }
        Ok(())
    }

    pub fn set_margin(&mut self, margin: i32) -> AxisResult<()> {
        if margin < 0 {
            return Err(AxisError::InvalidData(format!(
                "axis margin must be >= 0, got {margin}"
            )));
        }
        if self.margin != margin {
            self.margin = margin;
            self.layout_dirty = true;
        }
        Ok(())
    }

    pub fn set_autoscale_variant(&mut self, variant: AutoscaleVariant) {
        self.autoscale_variant = variant;
    }

    pub fn set_auto_scale(&mut self, enabled: bool) {
        self.auto_scale = enabled;
    }

    pub fn set_auto_scale_threshold(&mut self, threshold: f64) -> AxisResult<()> {
        if !(0.0..=1.0).contains(&threshold) {
            warn!(threshold, "rejecting autoscale threshold outside [0, 1]");
            return Err(AxisError::InvalidThreshold(threshold));
        }
        self.auto_scale_threshold = threshold;
        Ok(())
    }

    /// Enables or disables log scaling.
    ///
    /// Enabling log scale on a range with non-positive bounds re-commits the
    /// range through the log clamp. Returns `true` when the flag changed.
    pub fn set_log_scale(&mut self, enabled: bool) -> bool {
        if self.log_scale == enabled {
            return false;
        }
        self.log_scale = enabled;
        self.layout_dirty = true;
        if enabled && (self.range.lower() <= 0.0 || self.range.upper() <= 0.0) {
            let range = self.range;
            self.commit(range.lower(), range.upper());
        }
        true
    }

    /// Sets the display-direction flag.
    ///
    /// The stored range is swapped when its ordering disagrees with the flag.
    /// Returns `true` when the flag changed.
    pub fn set_inverted(&mut self, inverted: bool) -> bool {
        if self.inverted == inverted {
            return false;
        }
        self.inverted = inverted;
        let range = self.range;
        if inverted != range.is_min_bigger() {
            self.commit(range.upper(), range.lower());
        }
        true
    }

    /// Commits an explicit range.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::InvalidRange`] when either bound is NaN or infinite.
    pub fn set_range(&mut self, lower: f64, upper: f64) -> AxisResult<Range> {
        if !lower.is_finite() || !upper.is_finite() {
            warn!(lower, upper, "rejecting non-finite axis range");
            return Err(AxisError::InvalidRange { lower, upper });
        }
        self.commit(lower, upper);
        Ok(self.range)
    }

    /// Commits a range computed by a gesture or captured earlier (cancel, undo/redo).
    ///
    /// Non-finite ranges are ignored; returns `true` when the stored range changed.
    pub fn restore_range(&mut self, range: Range) -> bool {
        self.commit_internal(range.lower(), range.upper())
    }

    /// Drains the queued range-change notifications.
    pub fn drain_range_changes(&mut self) -> SmallVec<[RangeChange; 4]> {
        std::mem::take(&mut self.pending_changes)
    }

    #[must_use]
    pub fn has_pending_range_changes(&self) -> bool {
        !self.pending_changes.is_empty()
    }

    /// Maps a pixel offset along the axis to an axis value.
    ///
    /// Positions outside `[margin, pixel_length - margin]` extrapolate.
    #[must_use]
    pub fn value_at_pixel(&self, pixel: f64, force_linear: bool) -> f64 {
        self.value_at_pixel_in(self.range, pixel, force_linear)
    }

    /// Maps a pointer location to a value using the coordinate along this axis.
    #[must_use]
    pub fn value_at_point(&self, point: PixelPoint) -> f64 {
        self.value_at_pixel(f64::from(point.along(self.orientation)), false)
    }

    /// Same as [`Self::value_at_pixel`] but against an arbitrary range, used
    /// by gestures that must read their captured baseline instead of the live
    /// range.
    #[must_use]
    pub fn value_at_pixel_in(&self, range: Range, pixel: f64, force_linear: bool) -> f64 {
        let length = f64::from(self.pixel_length);
        let margin = f64::from(self.margin);
        let offset = match self.orientation {
            Orientation::Horizontal => pixel,
            Orientation::Vertical => length - pixel,
        };
        let ratio = (offset - margin) / self.usable_length();
        let (min, max) = (range.lower(), range.upper());

        if self.log_scale && !force_linear {
            let log_min = log10(min);
            let log_max = log10(max);
            pow10(log_min + ratio * (log_max - log_min))
        } else {
            let factor = max_magnitude(&[min, max]);
            let min = min / factor;
            let max = max / factor;
            (min + ratio * (max - min)) * factor
        }
    }

    /// Inverse of [`Self::value_at_pixel`].
    ///
    /// On log axes a non-positive value maps to the leading margin.
    #[must_use]
    pub fn pixel_at_value(&self, value: f64, force_linear: bool) -> f64 {
        let length = f64::from(self.pixel_length);
        let margin = f64::from(self.margin);
        let (min, max) = (self.range.lower(), self.range.upper());

        let offset = if self.log_scale && !force_linear {
            if value <= 0.0 {
                margin
            } else {
                let log_min = log10(min);
                (log10(value) - log_min) / (log10(max) - log_min) * self.usable_length() + margin
            }
        } else {
            let factor = max_magnitude(&[min, max]);
            let min = min / factor;
            let max = max / factor;
            (value / factor - min) / (max - min) * self.usable_length() + margin
        };

        match self.orientation {
            Orientation::Horizontal => offset,
            Orientation::Vertical => length - offset,
        }
    }

    /// Shifts the axis relative to `baseline` so that `from_value` lands where
    /// `to_value` was.
    ///
    /// `baseline` is the range captured when the drag started, so repeated
    /// steps never compound. Returns `true` when the step would leave the
    /// representable domain; the range is then left untouched.
    pub fn pan_by(&mut self, baseline: Range, from_value: f64, to_value: f64) -> bool {
        let (lower, upper) = if self.log_scale {
            if from_value <= 0.0
                || to_value <= 0.0
                || baseline.lower() <= 0.0
                || baseline.upper() <= 0.0
            {
                return true;
            }
            let shift = log10(to_value) - log10(from_value);
            let lower = log10(baseline.lower()) - shift;
            let upper = log10(baseline.upper()) - shift;
            if !exponents_representable(lower, upper) {
                return true;
            }
            (pow10(lower), pow10(upper))
        } else {
            let shift = to_value - from_value;
            (baseline.lower() - shift, baseline.upper() - shift)
        };

        if !lower.is_finite() || !upper.is_finite() {
            return true;
        }
        self.commit(lower, upper);
        false
    }

    /// Zooms around `center`, keeping its relative position in the range.
    ///
    /// Positive factors shrink the range (`factor = 0.1` removes 10% of the
    /// span). Negative factors expand it by the exact inverse ratio, so a
    /// zoom-in followed by a zoom-out of the same magnitude returns to the
    /// starting range. Factors outside `(-1, 1)` are ignored. Returns `true`
    /// when the stored range changed.
    pub fn zoom_around_point(&mut self, center: f64, factor: f64) -> bool {
        if !factor.is_finite() || factor <= -1.0 || factor >= 1.0 || !center.is_finite() {
            warn!(center, factor, "ignoring zoom with invalid center or factor");
            return false;
        }
        let effective = if factor < 0.0 {
            factor / (1.0 + factor)
        } else {
            factor
        };

        let (lower, upper) = (self.range.lower(), self.range.upper());
        let (new_lower, new_upper) = if self.log_scale {
            let center = if center > 0.0 { center } else { self.range.min() };
            let lower = log10(lower);
            let upper = log10(upper);
            let (t1, t2) = zoom_bounds(lower, upper, log10(center), effective);
            (pow10(clamp_exponent(t1)), pow10(clamp_exponent(t2)))
        } else {
            zoom_bounds(lower, upper, center, effective)
        };

        trace!(center, factor, new_lower, new_upper, "zoom around point");
        self.commit_internal(new_lower, new_upper)
    }

    /// Runs autoscale against the given data range.
    ///
    /// Does nothing unless autoscale is enabled or `force` is set. Returns
    /// `true` when the range changed.
    pub fn perform_autoscale(&mut self, data_range: Option<Range>, force: bool) -> bool {
        if !(force || self.auto_scale) {
            return false;
        }
        let engine = AutoscaleEngine::new(self.autoscale_variant, self.log_scale, self.inverted);
        match engine.decide(data_range, self.range, self.auto_scale_threshold) {
            AutoscaleDecision::Unchanged => false,
            AutoscaleDecision::NewRange(range) => {
                debug!(
                    lower = range.lower(),
                    upper = range.upper(),
                    variant = ?self.autoscale_variant,
                    "autoscale adjusting axis"
                );
                self.commit_internal(range.lower(), range.upper())
            }
        }
    }

    /// Feeds a data range observed after new trace data arrived.
    pub fn notify_data_range_candidate(&mut self, data_range: Range) -> bool {
        self.perform_autoscale(Some(data_range), false)
    }

    fn usable_length(&self) -> f64 {
        let usable = f64::from(self.pixel_length) - 2.0 * f64::from(self.margin);
        if usable > 0.0 { usable } else { 1.0 }
    }

    fn commit_internal(&mut self, lower: f64, upper: f64) -> bool {
        if !lower.is_finite() || !upper.is_finite() {
            debug!(lower, upper, "dropping non-finite internal range");
            return false;
        }
        self.commit(lower, upper)
    }

    /// Stores the normalized bounds; returns `true` when the range changed.
    fn commit(&mut self, lower: f64, upper: f64) -> bool {
        let (lower, upper) = normalize_bounds(lower, upper, self.log_scale);
        let old = self.range;
        let new = Range::new(lower, upper);
        self.range = new;
        if old != new {
            debug!(
                old_lower = old.lower(),
                old_upper = old.upper(),
                new_lower = new.lower(),
                new_upper = new.upper(),
                "axis range committed"
            );
            self.layout_dirty = true;
            self.pending_changes.push(RangeChange { old, new });
        }
        old != new
    }
}

/// Applies the log clamp and splits equal bounds, exactly as a commit does.
pub(crate) fn normalize_bounds(lower: f64, upper: f64, log_scale: bool) -> (f64, f64) {
    let (lower, upper) = if log_scale {
        clamp_log_bounds(lower, upper)
    } else {
        (lower, upper)
    };
    if lower != upper {
        return (lower, upper);
    }
    if log_scale {
        let (lo, hi) = split_degenerate(log10(lower));
        clamp_log_bounds(pow10(clamp_exponent(lo)), pow10(clamp_exponent(hi)))
    } else {
        split_degenerate(lower)
    }
}

fn zoom_bounds(lower: f64, upper: f64, center: f64, factor: f64) -> (f64, f64) {
    let spread = upper - lower;
    let r1 = center - lower;
    (lower + r1 * factor, upper - (spread - r1) * factor)
}

fn clamp_log_bounds(lower: f64, upper: f64) -> (f64, f64) {
    let upper = if upper <= 0.0 {
        DEFAULT_LOG_SCALE_MAX
    } else {
        upper
    };
    let lower = if lower <= 0.0 {
        DEFAULT_LOG_SCALE_MIN_FRACTION * upper
    } else {
        lower
    };
    (lower, upper)
}

/// Splits `value` into two distinct finite bounds, symmetric when possible.
fn split_degenerate(value: f64) -> (f64, f64) {
    let magnitude = value.abs().max(1.0);
    let floor = magnitude * MIN_SPLIT_FRACTION;
    let mut delta = magnitude;

    while delta >= floor {
        let lower = value - delta;
        let upper = value + delta;
        if lower.is_finite() && upper.is_finite() && lower != upper {
            return (lower, upper);
        }
        if !upper.is_finite() {
            let lower = value - 2.0 * delta;
            if lower.is_finite() && lower != value {
                return (lower, value);
            }
        }
        if !lower.is_finite() {
            let upper = value + 2.0 * delta;
            if upper.is_finite() && upper != value {
                return (value, upper);
            }
        }
        delta *= 0.5;
    }

    let step = magnitude * f64::EPSILON;
    if (value + step).is_finite() {
        (value, value + step)
    } else {
        (value - step, value)
    }
}
