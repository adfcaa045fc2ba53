//! Log10 helpers shared by the axis transforms, zoom and autoscale.

/// log10 of the smallest positive subnormal `f64` (4.940656e-324).
pub const LOWEST_LOG_10: f64 = -323.3062;
/// log10 of `f64::MAX` (1.797629e308).
pub const HIGHEST_LOG_10: f64 = 308.2547;

/// Upper bound substituted when a log axis receives a non-positive upper bound.
pub const DEFAULT_LOG_SCALE_MAX: f64 = 100.0;
/// Lower bound, as a fraction of the upper bound, substituted for a non-positive lower bound.
pub const DEFAULT_LOG_SCALE_MIN_FRACTION: f64 = 0.1;

#[must_use]
pub fn log10(value: f64) -> f64 {
    value.log10()
}

#[must_use]
pub fn pow10(exponent: f64) -> f64 {
    10_f64.powf(exponent)
}

/// Clamps a log10 exponent to the range representable as a positive `f64`.
#[must_use]
pub fn clamp_exponent(exponent: f64) -> f64 {
    exponent.clamp(LOWEST_LOG_10, HIGHEST_LOG_10)
}

/// Returns `true` when both exponents map back to finite, positive values.
#[must_use]
pub fn exponents_representable(lower: f64, upper: f64) -> bool {
    let (lo, hi) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };
    lo >= LOWEST_LOG_10 && hi <= HIGHEST_LOG_10
}

/// Power of two at or below the larger magnitude of `values`, `1.0` when all are zero.
///
/// Dividing by a power of two is exact, so normalizing and denormalizing
/// with this factor never perturbs a value.
#[must_use]
pub fn max_magnitude(values: &[f64]) -> f64 {
    let magnitude = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0_f64, |acc, value| acc.max(value.abs()));
    if magnitude == 0.0 || !magnitude.is_normal() {
        return 1.0;
    }
    let exponent = magnitude.log2().floor();
    let factor = 2_f64.powf(exponent);
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_exponent, exponents_representable, max_magnitude};

    #[test]
    fn max_magnitude_is_power_of_two() {
        assert_eq!(max_magnitude(&[0.0, 10.0, 2.0, -3.0]), 8.0);
        assert_eq!(max_magnitude(&[0.0, 0.0]), 1.0);
        assert_eq!(max_magnitude(&[0.25]), 0.25);
    }

    #[test]
    fn exponent_domain_is_bounded() {
        assert_eq!(clamp_exponent(400.0), super::HIGHEST_LOG_10);
        assert!(!exponents_representable(-400.0, 1.0));
        assert!(exponents_representable(2.0, -2.0));
    }
}
