use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Range;
use super::axis_range::normalize_bounds;
use super::log_scale::{DEFAULT_LOG_SCALE_MIN_FRACTION, log10, max_magnitude, pow10};

/// Threshold formula used to decide whether an axis should follow its data.
///
/// The two formulas produce different thresholds for the same inputs, so an
/// axis uses exactly one of them for its whole lifetime unless reconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AutoscaleVariant {
    /// Both ranges are divided by a shared power-of-two scale factor and the
    /// threshold is `0.5 * threshold * spread(axis)`.
    #[default]
    Normalized,
    /// Raw values; the threshold is `threshold * spread(data)`, or derived
    /// from `|data max|` when the data range is degenerate.
    DataSpread,
}

/// Outcome of one autoscale evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AutoscaleDecision {
    Unchanged,
    NewRange(Range),
}

/// Decides whether and how an axis range should track its data range.
///
/// Only the side(s) whose gap crossed the threshold move. A gap is the
/// signed distance from the data bound to the axis bound, measured inward:
/// negative when the data spills past the axis, at least `thr` when the axis
/// leaves too much empty space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AutoscaleEngine {
    variant: AutoscaleVariant,
    log_scale: bool,
    inverted: bool,
}

impl AutoscaleEngine {
    #[must_use]
    pub fn new(variant: AutoscaleVariant, log_scale: bool, inverted: bool) -> Self {
        Self {
            variant,
            log_scale,
            inverted,
        }
    }

    #[must_use]
    pub fn variant(self) -> AutoscaleVariant {
        self.variant
    }

    #[must_use]
    pub fn decide(
        self,
        data_range: Option<Range>,
        axis_range: Range,
        threshold: f64,
    ) -> AutoscaleDecision {
        let Some(data_range) = data_range else {
            return AutoscaleDecision::Unchanged;
        };
        if !data_range.is_finite() || !axis_range.is_finite() || !threshold.is_finite() {
            return AutoscaleDecision::Unchanged;
        }

        let raw_axis_min = axis_range.min();
        let raw_axis_max = axis_range.max();
        let mut data_min = data_range.min();
        let mut data_max = data_range.max();
        let mut axis_min = raw_axis_min;
        let mut axis_max = raw_axis_max;

        if self.log_scale {
            if data_max <= 0.0 {
                data_max = 1.0;
            }
            if data_min <= 0.0 {
                data_min = DEFAULT_LOG_SCALE_MIN_FRACTION * data_max;
            }
            if axis_min <= 0.0 || axis_max <= 0.0 {
                return AutoscaleDecision::Unchanged;
            }
            data_min = log10(data_min);
            data_max = log10(data_max);
            axis_min = log10(axis_min);
            axis_max = log10(axis_max);
        }

        let (factor, thr) = match self.variant {
            AutoscaleVariant::Normalized => {
                let factor = max_magnitude(&[data_min, data_max, axis_min, axis_max]);
                data_min /= factor;
                data_max /= factor;
                axis_min /= factor;
                axis_max /= factor;
                (factor, 0.5 * threshold * (axis_max - axis_min))
            }
            AutoscaleVariant::DataSpread => {
                let thr = if data_max == data_min {
                    if data_max == 0.0 {
                        threshold
                    } else {
                        data_max.abs() * threshold
                    }
                } else {
                    (data_max - data_min) * threshold
                };
                (1.0, thr)
            }
        };

        let lower_gap = data_min - axis_min;
        let upper_gap = axis_max - data_max;
        let lower_changed = lower_gap < 0.0 || lower_gap >= thr;
        let upper_changed = upper_gap < 0.0 || upper_gap >= thr;
        trace!(
            lower_gap,
            upper_gap,
            thr,
            lower_changed,
            upper_changed,
            "autoscale gaps"
        );
        if !lower_changed && !upper_changed {
            return AutoscaleDecision::Unchanged;
        }

        let denormalize = |value: f64| {
            let value = value * factor;
            if self.log_scale { pow10(value) } else { value }
        };
        let new_min = if lower_changed {
            denormalize(data_min)
        } else {
            raw_axis_min
        };
        let new_max = if upper_changed {
            denormalize(data_max)
        } else {
            raw_axis_max
        };

        if !new_min.is_finite() || !new_max.is_finite() {
            return AutoscaleDecision::Unchanged;
        }
        // Single-value data widens to the same split the axis commits, so an
        // axis already showing that split stays put.
        let (new_min, new_max) = normalize_bounds(new_min, new_max, self.log_scale);
        if new_min.to_bits() == raw_axis_min.to_bits() && new_max.to_bits() == raw_axis_max.to_bits()
        {
            return AutoscaleDecision::Unchanged;
        }

        if self.inverted {
            AutoscaleDecision::NewRange(Range::new(new_max, new_min))
        } else {
            AutoscaleDecision::NewRange(Range::new(new_min, new_max))
        }
    }
}
