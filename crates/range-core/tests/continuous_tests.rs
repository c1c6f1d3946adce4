// Host-side tests for the continuous range controller.

use range_core::*;

fn controller(gap: f64) -> RangeController {
    RangeController::new(Domain::new(0.0, 100.0, 1.0).unwrap(), gap).unwrap()
}

fn track() -> TrackRect {
    TrackRect::new(0.0, 200.0)
}

#[test]
fn starts_with_whole_domain_selected() {
    let c = controller(3.0);
    assert_eq!(c.min_value(), 0.0);
    assert_eq!(c.max_value(), 100.0);
}

#[test]
fn set_min_at_max_value_is_rejected() {
    let mut c = controller(3.0);
    assert!(!c.set_min(c.max_value()));
    assert_eq!(c.min_value(), 0.0);
    assert_eq!(c.max_value(), 100.0);
}

#[test]
fn set_max_inside_gap_is_rejected() {
    // min=0, gap=3: 2 < 0 + 3
    let mut c = controller(3.0);
    assert!(!c.set_max(2.0));
    assert_eq!(c.max_value(), 100.0);
}

#[test]
fn set_min_and_max_accept_boundaries() {
    let mut c = controller(3.0);
    assert!(c.set_max(50.0));
    // exactly max - gap is allowed
    assert!(c.set_min(47.0));
    assert!(!c.set_min(47.5));
    assert!(!c.set_max(49.0));
    assert!(!c.set_min(-1.0));
    assert!(!c.set_max(101.0));
    assert_eq!((c.min_value(), c.max_value()), (47.0, 50.0));
}

#[test]
fn unchanged_value_reports_no_change() {
    let mut c = controller(3.0);
    assert!(!c.set_min(0.0));
    assert!(!c.set_max(100.0));
}

#[test]
fn drag_min_maps_pointer_to_value() {
    let mut c = controller(3.0);
    assert!(c.on_drag(50.0, track(), Handle::Min));
    assert_eq!(c.min_value(), 25.0);
}

#[test]
fn drag_max_maps_pointer_to_value() {
    let mut c = controller(3.0);
    assert!(c.on_drag(150.0, track(), Handle::Max));
    assert_eq!(c.max_value(), 75.0);
}

#[test]
fn touch_coordinate_quantizes_to_step() {
    let mut c = controller(3.0);
    // 76 / 200 * 100 = 38
    assert!(c.on_drag(76.0, track(), Handle::Min));
    assert_eq!(c.min_value(), 38.0);
}

#[test]
fn fractional_step_quantizes() {
    let d = Domain::new(0.0, 10.0, 0.5).unwrap();
    let mut c = RangeController::new(d, 1.0).unwrap();
    // raw 3.3 -> 6.6 steps -> 7 steps -> 3.5
    assert!(c.on_drag(33.0, TrackRect::new(0.0, 100.0), Handle::Min));
    assert_eq!(c.min_value(), 3.5);
}

#[test]
fn dragging_min_past_max_stops_one_step_short() {
    let mut c = controller(1.0);
    assert!(c.set_max(50.0));
    assert!(c.on_drag(400.0, track(), Handle::Min));
    assert_eq!(c.min_value(), 49.0);
}

#[test]
fn dragging_max_past_min_stops_one_step_short() {
    let mut c = controller(1.0);
    assert!(c.set_min(30.0));
    assert!(c.on_drag(-50.0, track(), Handle::Max));
    assert_eq!(c.max_value(), 31.0);
}

#[test]
fn dragging_inside_gap_keeps_previous_position() {
    let mut c = controller(3.0);
    assert!(c.set_max(50.0));
    assert!(c.on_drag(40.0, track(), Handle::Min));
    assert_eq!(c.min_value(), 20.0);
    // clamps to 49, which is inside the 3-wide gap
    assert!(!c.on_drag(200.0, track(), Handle::Min));
    assert_eq!(c.min_value(), 20.0);
    assert!(c.min_value() <= c.max_value() - c.min_gap());
}

#[test]
fn zero_width_track_skips_update() {
    let mut c = controller(3.0);
    assert!(!c.on_drag(50.0, TrackRect::new(0.0, 0.0), Handle::Min));
    assert_eq!(c.min_value(), 0.0);
}

#[test]
fn arrow_keys_step_the_focused_handle() {
    let mut c = controller(3.0);
    assert!(c.on_key("ArrowRight", Handle::Min));
    assert!(c.on_key("ArrowUp", Handle::Min));
    assert_eq!(c.min_value(), 2.0);
    assert!(c.on_key("ArrowDown", Handle::Max));
    assert!(c.on_key("ArrowLeft", Handle::Max));
    assert_eq!(c.max_value(), 98.0);
}

#[test]
fn arrow_keys_respect_domain_edges() {
    let mut c = controller(3.0);
    assert!(!c.on_key("ArrowLeft", Handle::Min));
    assert!(!c.on_key("ArrowRight", Handle::Max));
    assert!(!c.on_key("Enter", Handle::Min));
    assert_eq!((c.min_value(), c.max_value()), (0.0, 100.0));
}

#[test]
fn text_entry_goes_through_validation() {
    let mut c = controller(3.0);
    assert!(c.set_from_input(Handle::Min, "10"));
    assert_eq!(c.min_value(), 10.0);
    assert!(c.set_from_input(Handle::Max, " 90 "));
    assert_eq!(c.max_value(), 90.0);
    assert!(c.set_from_input(Handle::Min, "12,5"));
    assert_eq!(c.min_value(), 12.5);
    assert!(!c.set_from_input(Handle::Min, "98"));
    assert!(!c.set_from_input(Handle::Min, "abc"));
    assert!(!c.set_from_input(Handle::Min, ""));
    assert_eq!(c.min_value(), 12.5);
}

#[test]
fn snapshot_describes_handles() {
    let mut c = controller(3.0);
    assert!(c.set_min(25.0));
    assert!(c.set_max(75.0));
    let snap = c.snapshot();
    let min = snap.handle(Handle::Min);
    assert_eq!(min.label, "Minimum value: 25,00 €");
    assert_eq!(min.position, 25.0);
    assert_eq!((min.min, min.max), (0.0, 100.0));
    let max = snap.handle(Handle::Max);
    assert_eq!(max.label, "Maximum value: 75,00 €");
    assert_eq!(max.position, 75.0);
    assert_eq!(snap.highlight, Highlight { left: 25.0, right: 25.0 });
    assert!(snap.markers.is_empty());
    assert_eq!(snap.bound_labels[0], "Min: 25,00 €");
}

#[test]
fn track_click_is_ignored_in_continuous_mode() {
    let mut c = controller(3.0);
    assert!(!c.on_track_click(100.0, track()));
    assert_eq!((c.min_value(), c.max_value()), (0.0, 100.0));
}
