use super::Range;

/// Unions the data ranges of every visible trace on an axis.
///
/// Ranges with a non-finite bound are ignored so one broken trace cannot
/// blow up autoscale for the others.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataRangeAccumulator {
    low: Option<f64>,
    high: Option<f64>,
}

impl DataRangeAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one trace range in. Returns `false` when the range was skipped.
    pub fn push(&mut self, range: Range) -> bool {
        if !range.is_finite() {
            return false;
        }
        let (min, max) = (range.min(), range.max());
        self.low = Some(self.low.map_or(min, |low| low.min(min)));
        self.high = Some(self.high.map_or(max, |high| high.max(max)));
        true
    }

    /// Folds an optional trace range in; `None` (empty trace) is ignored.
    pub fn push_optional(&mut self, range: Option<Range>) -> bool {
        range.is_some_and(|range| self.push(range))
    }

    #[must_use]
    pub fn finish(self) -> Option<Range> {
        match (self.low, self.high) {
            (Some(low), Some(high)) => Some(Range::new(low, high)),
            _ => None,
        }
    }
}

impl FromIterator<Range> for DataRangeAccumulator {
    fn from_iter<T: IntoIterator<Item = Range>>(iter: T) -> Self {
        let mut accumulator = Self::new();
        for range in iter {
            accumulator.push(range);
        }
        accumulator
    }
}
