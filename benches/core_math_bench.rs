use axis_rs::core::{
    AutoscaleEngine, AutoscaleVariant, AxisId, AxisRangeController, Orientation, PixelPoint, Range,
};
use axis_rs::interaction::{Modifiers, PointerButton, ZoomGestureType};
use axis_rs::{XyPlot, XyPlotConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_axis(lower: f64, upper: f64, log_scale: bool) -> AxisRangeController {
    let mut axis = AxisRangeController::new(Orientation::Horizontal);
    axis.set_pixel_length(1920).expect("positive length");
    axis.set_margin(8).expect("non-negative margin");
    axis.set_log_scale(log_scale);
    axis.set_range(lower, upper).expect("finite range");
    axis
}

fn bench_linear_pixel_round_trip(c: &mut Criterion) {
    let axis = build_axis(0.0, 10_000.0, false);

    c.bench_function("linear_pixel_round_trip", |b| {
        b.iter(|| {
            let px = axis.pixel_at_value(black_box(4_321.123), false);
            let _ = axis.value_at_pixel(black_box(px), false);
        })
    });
}

fn bench_log_pixel_round_trip(c: &mut Criterion) {
    let axis = build_axis(1e-3, 1e6, true);

    c.bench_function("log_pixel_round_trip", |b| {
        b.iter(|| {
            let px = axis.pixel_at_value(black_box(4_321.123), false);
            let _ = axis.value_at_pixel(black_box(px), false);
        })
    });
}

fn bench_zoom_in_out_cycle(c: &mut Criterion) {
    let mut axis = build_axis(-500.0, 2_500.0, false);

    c.bench_function("zoom_in_out_cycle", |b| {
        b.iter(|| {
            axis.zoom_around_point(black_box(1_000.0), 0.1);
            axis.zoom_around_point(black_box(1_000.0), -0.1);
            axis.drain_range_changes();
        })
    });
}

fn bench_autoscale_decision_10k_samples(c: &mut Criterion) {
    let samples: Vec<f64> = (0..10_000)
        .map(|i| {
            let t = f64::from(i);
            100.0 + (t * 0.01).sin() * 25.0 + t * 0.002
        })
        .collect();
    let engine = AutoscaleEngine::new(AutoscaleVariant::Normalized, false, false);
    let axis_range = Range::new(0.0, 100.0);

    c.bench_function("autoscale_decision_10k_samples", |b| {
        b.iter(|| {
            let data = Range::from_samples(black_box(&samples).iter().copied(), false);
            let _ = engine.decide(data, axis_range, 0.01);
        })
    });
}

fn bench_plot_rubberband_gesture(c: &mut Criterion) {
    let config = XyPlotConfig::new()
        .with_primary_axes(1600, 900)
        .with_gesture_type(ZoomGestureType::RubberbandZoom)
        .with_history_limit(0);
    let mut plot = XyPlot::new(config).expect("plot init");

    c.bench_function("plot_rubberband_gesture", |b| {
        b.iter(|| {
            plot.plot_pointer_down(PixelPoint::new(100, 100), PointerButton::Primary, Modifiers::NONE);
            plot.plot_pointer_move(black_box(PixelPoint::new(900, 500)));
            plot.plot_pointer_up(PixelPoint::new(900, 500), PointerButton::Primary);
            plot.set_range(AxisId(0), 0.0, 100.0).expect("known axis");
            plot.set_range(AxisId(1), 0.0, 100.0).expect("known axis");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_pixel_round_trip,
    bench_log_pixel_round_trip,
    bench_zoom_in_out_cycle,
    bench_autoscale_decision_10k_samples,
    bench_plot_rubberband_gesture
);
criterion_main!(benches);
