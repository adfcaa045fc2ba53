use serde::{Deserialize, Serialize};

/// Immutable pair of axis bounds.
///
/// `lower` may be numerically greater than `upper`; such a range is inverted
/// and still valid. `Range` performs no validation of its own, finite-ness is
/// enforced where ranges are committed to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn with_lower(self, lower: f64) -> Self {
        Self { lower, ..self }
    }

    #[must_use]
    pub fn with_upper(self, upper: f64) -> Self {
        Self { upper, ..self }
    }

    /// Returns `true` when both bounds are equal.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    /// Signed width, negative for inverted ranges.
    #[must_use]
    pub fn spread(self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` when `lower > upper`.
    #[must_use]
    pub fn is_min_bigger(self) -> bool {
        self.lower > self.upper
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Smaller of the two bounds.
    #[must_use]
    pub fn min(self) -> f64 {
        self.lower.min(self.upper)
    }

    /// Larger of the two bounds.
    #[must_use]
    pub fn max(self) -> f64 {
        self.lower.max(self.upper)
    }

    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            lower: self.upper,
            upper: self.lower,
        }
    }

    /// Returns `true` when `value` lies between the bounds, whatever their order.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Computes the min/max envelope of one trace's samples.
    ///
    /// Non-finite samples are skipped. With `positive_only`, samples `<= 0`
    /// are skipped as well (log axes cannot show them). Returns `None` when
    /// no sample survives.
    #[must_use]
    pub fn from_samples<I>(samples: I, positive_only: bool) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for value in samples {
            if !value.is_finite() || (positive_only && value <= 0.0) {
                continue;
            }
            low = low.min(value);
            high = high.max(value);
        }
        if low.is_finite() && high.is_finite() {
            Some(Self::new(low, high))
        } else {
            None
        }
    }
}

/// Old/new pair produced by a committed range mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeChange {
    pub old: Range,
    pub new: Range,
}
