use approx::assert_abs_diff_eq;
use axis_rs::core::{AxisId, AxisRangeController, Orientation, PixelPoint, Range};
use axis_rs::interaction::{
    AxisGestureCoordinator, GestureScope, GestureSettings, GestureSignal, GestureSignals,
    Modifiers, PointerButton, ScheduledZoom, ZoomGestureType,
};

const AXIS: AxisId = AxisId(0);

fn build_axis() -> AxisRangeController {
    let mut axis = AxisRangeController::new(Orientation::Horizontal);
    axis.set_pixel_length(200).expect("positive length");
    axis.drain_range_changes();
    axis
}

fn build_coordinator(gesture: ZoomGestureType) -> AxisGestureCoordinator {
    let mut coordinator = AxisGestureCoordinator::new(AXIS, GestureSettings::default());
    coordinator.set_gesture_type(gesture, Orientation::Horizontal);
    coordinator
}

fn scheduled_step(signals: &GestureSignals) -> Option<ScheduledZoom> {
    signals.iter().find_map(|signal| match signal {
        GestureSignal::ScheduleZoomRepeat(step) => Some(*step),
        _ => None,
    })
}

fn assert_range_near(actual: Range, lower: f64, upper: f64) {
    assert_abs_diff_eq!(actual.lower(), lower, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.upper(), upper, epsilon = 1e-9);
}

fn drag(
    coordinator: &mut AxisGestureCoordinator,
    axis: &mut AxisRangeController,
    button: PointerButton,
    path: &[(i32, i32)],
) -> GestureSignals {
    let (first, rest) = path.split_first().expect("non-empty path");
    coordinator.pointer_down(
        axis,
        PixelPoint::new(first.0, first.1),
        button,
        Modifiers::NONE,
    );
    let mut last = *first;
    for point in rest {
        coordinator.pointer_move(axis, PixelPoint::new(point.0, point.1));
        last = *point;
    }
    coordinator.pointer_up(axis, PixelPoint::new(last.0, last.1), button)
}

#[test]
fn rubberband_commits_pixel_interval() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);

    let signals = drag(
        &mut coordinator,
        &mut axis,
        PointerButton::Primary,
        &[(10, 0), (110, 50)],
    );

    assert_range_near(axis.range(), 5.0, 55.0);
    assert!(!coordinator.is_armed());
    assert!(signals.iter().any(|signal| matches!(
        signal,
        GestureSignal::Committed { scope: GestureScope::Axis(AXIS), before, .. }
            if before.as_slice() == [(AXIS, Range::new(0.0, 100.0))]
    )));
}

#[test]
fn rubberband_commit_is_order_corrected() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);
    drag(
        &mut coordinator,
        &mut axis,
        PointerButton::Primary,
        &[(110, 0), (10, 0)],
    );
    assert_range_near(axis.range(), 5.0, 55.0);
}

#[test]
fn rubberband_on_inverted_axis_stays_inverted() {
    let mut axis = build_axis();
    axis.set_range(100.0, 0.0).expect("finite range");
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);
    drag(
        &mut coordinator,
        &mut axis,
        PointerButton::Primary,
        &[(10, 0), (110, 0)],
    );
    assert!(axis.range().is_min_bigger());
    assert_range_near(axis.range(), 95.0, 45.0);
}

#[test]
fn drag_without_extent_along_axis_keeps_range() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);
    drag(
        &mut coordinator,
        &mut axis,
        PointerButton::Primary,
        &[(50, 0), (50, 80)],
    );
    assert_eq!(axis.range(), Range::new(0.0, 100.0));
    assert!(!axis.has_pending_range_changes());
}

#[test]
fn gesture_invalid_for_orientation_never_arms() {
    let mut axis = build_axis();
    let mut coordinator = AxisGestureCoordinator::new(AXIS, GestureSettings::default());
    let signals = coordinator.set_gesture_type(ZoomGestureType::VerticalZoom, Orientation::Horizontal);
    assert_eq!(
        signals.as_slice(),
        [GestureSignal::CursorRequested {
            scope: GestureScope::Axis(AXIS),
            gesture: ZoomGestureType::None,
        }]
    );

    let signals = coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(10, 10),
        PointerButton::Primary,
        Modifiers::NONE,
    );
    assert!(signals.is_empty());
    assert!(!coordinator.is_armed());
}

#[test]
fn middle_button_pans_and_restores_selected_gesture() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);

    coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(100, 0),
        PointerButton::Middle,
        Modifiers::NONE,
    );
    assert_eq!(coordinator.gesture_type(), ZoomGestureType::Panning);
    coordinator.pointer_move(&mut axis, PixelPoint::new(120, 0));
    assert_range_near(axis.range(), -10.0, 90.0);

    let signals = coordinator.pointer_up(&mut axis, PixelPoint::new(120, 0), PointerButton::Middle);
    assert_range_near(axis.range(), -10.0, 90.0);
    assert_eq!(coordinator.gesture_type(), ZoomGestureType::RubberbandZoom);
    assert!(signals.iter().any(|signal| matches!(
        signal,
        GestureSignal::CursorRequested {
            gesture: ZoomGestureType::RubberbandZoom,
            ..
        }
    )));
}

#[test]
fn gesture_type_chosen_during_middle_pan_survives_release() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);

    coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(100, 0),
        PointerButton::Middle,
        Modifiers::NONE,
    );
    coordinator.set_gesture_type(ZoomGestureType::ZoomOut, Orientation::Horizontal);
    assert!(coordinator.is_armed());

    let signals = coordinator.pointer_up(&mut axis, PixelPoint::new(100, 0), PointerButton::Middle);
    assert_eq!(coordinator.gesture_type(), ZoomGestureType::ZoomOut);
    assert!(!signals.iter().any(|signal| matches!(
        signal,
        GestureSignal::CursorRequested {
            gesture: ZoomGestureType::RubberbandZoom,
            ..
        }
    )));
}

#[test]
fn pointer_down_while_armed_is_ignored() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);
    coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(10, 0),
        PointerButton::Primary,
        Modifiers::NONE,
    );
    let signals = coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(90, 0),
        PointerButton::Middle,
        Modifiers::NONE,
    );
    assert!(signals.is_empty());
    assert_eq!(
        coordinator.state().map(|state| state.start()),
        Some(PixelPoint::new(10, 0))
    );

    let signals = coordinator.pointer_up(&mut axis, PixelPoint::new(90, 0), PointerButton::Middle);
    assert!(signals.is_empty());
    assert!(coordinator.is_armed());
}

#[test]
fn cancelled_pan_restores_captured_range() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::Panning);
    coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(100, 0),
        PointerButton::Primary,
        Modifiers::NONE,
    );
    coordinator.pointer_move(&mut axis, PixelPoint::new(150, 0));
    assert_range_near(axis.range(), -25.0, 75.0);

    let signals = coordinator.cancel(&mut axis);
    assert_eq!(axis.range(), Range::new(0.0, 100.0));
    assert!(!coordinator.is_armed());
    assert!(matches!(
        signals.first(),
        Some(GestureSignal::Cancelled {
            gesture: ZoomGestureType::Panning,
            ..
        })
    ));
}

#[test]
fn dynamic_zoom_classification_is_sticky_on_an_axis() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::DynamicZoom);
    coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(10, 10),
        PointerButton::Primary,
        Modifiers::NONE,
    );
    coordinator.pointer_move(&mut axis, PixelPoint::new(15, 12));
    assert_eq!(
        coordinator.state().map(|state| state.gesture()),
        Some(ZoomGestureType::DynamicZoom)
    );

    coordinator.pointer_move(&mut axis, PixelPoint::new(60, 12));
    coordinator.pointer_move(&mut axis, PixelPoint::new(60, 100));
    assert_eq!(
        coordinator.state().map(|state| state.gesture()),
        Some(ZoomGestureType::HorizontalZoom)
    );

    coordinator.pointer_up(&mut axis, PixelPoint::new(60, 100), PointerButton::Primary);
    assert_range_near(axis.range(), 5.0, 30.0);
}

#[test]
fn dynamic_zoom_across_the_axis_commits_nothing() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::DynamicZoom);
    let signals = drag(
        &mut coordinator,
        &mut axis,
        PointerButton::Primary,
        &[(10, 10), (12, 80)],
    );
    assert_eq!(axis.range(), Range::new(0.0, 100.0));
    assert!(signals.iter().any(|signal| matches!(
        signal,
        GestureSignal::Committed {
            gesture: ZoomGestureType::VerticalZoom,
            ..
        }
    )));
}

#[test]
fn press_and_hold_zoom_repeats_until_release() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::ZoomIn);

    let signals = coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(100, 0),
        PointerButton::Primary,
        Modifiers::NONE,
    );
    let step = scheduled_step(&signals).expect("zoom in schedules a repeat");
    assert_eq!(step.scope, GestureScope::Axis(AXIS));

    let signals = coordinator.on_zoom_repeat(&mut axis, step);
    assert_range_near(axis.range(), 5.0, 95.0);
    let next = scheduled_step(&signals).expect("armed zoom reposts itself");

    coordinator.pointer_up(&mut axis, PixelPoint::new(100, 0), PointerButton::Primary);
    assert_range_near(axis.range(), 9.5, 90.5);

    let signals = coordinator.on_zoom_repeat(&mut axis, next);
    assert!(signals.is_empty());
    assert_range_near(axis.range(), 9.5, 90.5);
}

#[test]
fn leaving_the_axis_releases_press_and_hold_zoom() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::ZoomOut);
    coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(100, 0),
        PointerButton::Primary,
        Modifiers::NONE,
    );

    let signals = coordinator.pointer_exit(&mut axis);
    assert!(!coordinator.is_armed());
    assert!(
        signals
            .iter()
            .any(|signal| matches!(signal, GestureSignal::Committed { .. }))
    );
    assert_range_near(axis.range(), -50.0 / 9.0, 950.0 / 9.0);
}

#[test]
fn leaving_the_axis_keeps_a_rubberband_armed() {
    let mut axis = build_axis();
    let mut coordinator = build_coordinator(ZoomGestureType::RubberbandZoom);
    coordinator.pointer_down(
        &mut axis,
        PixelPoint::new(10, 0),
        PointerButton::Primary,
        Modifiers::NONE,
    );
    assert!(coordinator.pointer_exit(&mut axis).is_empty());
    assert!(coordinator.is_armed());
}
