use axis_rs::core::{
    AutoscaleDecision, AutoscaleEngine, AutoscaleVariant, AxisRangeController, Orientation, Range,
};
use proptest::prelude::*;

fn axis_with_range(lower: f64, upper: f64) -> AxisRangeController {
    let mut axis = AxisRangeController::new(Orientation::Horizontal);
    axis.set_pixel_length(1024).expect("positive length");
    axis.set_range(lower, upper).expect("finite range");
    axis
}

fn variant_strategy() -> impl Strategy<Value = AutoscaleVariant> {
    prop_oneof![
        Just(AutoscaleVariant::Normalized),
        Just(AutoscaleVariant::DataSpread)
    ]
}

proptest! {
    #[test]
    fn equal_bounds_always_split_into_a_usable_range(value in -1e300f64..1e300) {
        let axis = axis_with_range(value, value);
        let range = axis.range();
        prop_assert!(range.is_finite());
        prop_assert!(range.lower() < range.upper());
    }

    #[test]
    fn log_axis_bounds_stay_positive(
        lower in -1e6f64..1e6,
        upper in -1e6f64..1e6
    ) {
        let mut axis = AxisRangeController::new(Orientation::Vertical);
        axis.set_log_scale(true);
        let range = axis.set_range(lower, upper).expect("finite range");
        prop_assert!(range.lower() > 0.0);
        prop_assert!(range.upper() > 0.0);
        prop_assert!(range.lower() != range.upper());
    }

    #[test]
    fn zoom_out_inverts_zoom_in(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        center_factor in 0.0f64..1.0,
        zoom in 0.01f64..0.9
    ) {
        let upper = lower + span;
        let center = lower + center_factor * span;
        let mut axis = axis_with_range(lower, upper);

        prop_assert!(axis.zoom_around_point(center, zoom));
        prop_assert!(axis.range().spread() < span);
        prop_assert!(axis.zoom_around_point(center, -zoom));

        let tolerance = 1e-6 * (lower.abs() + span);
        let range = axis.range();
        prop_assert!((range.lower() - lower).abs() <= tolerance);
        prop_assert!((range.upper() - upper).abs() <= tolerance);
    }

    #[test]
    fn pan_back_returns_to_the_start(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        from in -1_000.0f64..1_000.0,
        to in -1_000.0f64..1_000.0
    ) {
        let mut axis = axis_with_range(lower, lower + span);
        let baseline = axis.range();

        prop_assert!(!axis.pan_by(baseline, from, to));
        let moved = axis.range();
        prop_assert!(!axis.pan_by(moved, to, from));

        let tolerance = 1e-9 * (lower.abs() + span + 2_000.0);
        let range = axis.range();
        prop_assert!((range.lower() - baseline.lower()).abs() <= tolerance);
        prop_assert!((range.upper() - baseline.upper()).abs() <= tolerance);
    }

    #[test]
    fn data_spread_autoscale_is_idempotent(
        data_lower in -1_000.0f64..1_000.0,
        data_span in 0.01f64..1_000.0,
        axis_lower in -2_000.0f64..2_000.0,
        axis_span in 0.01f64..4_000.0,
        threshold in 0.01f64..0.5
    ) {
        let engine = AutoscaleEngine::new(AutoscaleVariant::DataSpread, false, false);
        let data = Range::new(data_lower, data_lower + data_span);
        let axis = Range::new(axis_lower, axis_lower + axis_span);

        let settled = match engine.decide(Some(data), axis, threshold) {
            AutoscaleDecision::NewRange(range) => range,
            AutoscaleDecision::Unchanged => axis,
        };
        prop_assert_eq!(
            engine.decide(Some(data), settled, threshold),
            AutoscaleDecision::Unchanged
        );
    }

    #[test]
    fn axis_matching_its_data_is_left_alone(
        variant in variant_strategy(),
        lower in -1e9f64..1e9,
        span in 1e-3f64..1e9,
        threshold in 0.001f64..1.0
    ) {
        let range = Range::new(lower, lower + span);
        let engine = AutoscaleEngine::new(variant, false, false);
        prop_assert_eq!(
            engine.decide(Some(range), range, threshold),
            AutoscaleDecision::Unchanged
        );
    }
}
