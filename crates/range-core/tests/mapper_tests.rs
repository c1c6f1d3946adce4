// Host-side tests for the pointer-to-position mapper.

use range_core::*;

#[test]
fn half_track_maps_to_half_percent() {
    let rect = TrackRect::new(0.0, 100.0);
    assert_eq!(pointer_percent(50.0, rect), Some(0.5));
    // round(0.5 * 5) = 3 for a six item list
    assert_eq!(map_index(50.0, rect, 6), Some(3));
}

#[test]
fn percent_accounts_for_track_offset() {
    let rect = TrackRect::new(100.0, 200.0);
    assert_eq!(pointer_percent(150.0, rect), Some(0.25));
}

#[test]
fn out_of_track_pointer_is_clamped() {
    let rect = TrackRect::new(10.0, 100.0);
    assert_eq!(pointer_percent(-30.0, rect), Some(0.0));
    assert_eq!(pointer_percent(500.0, rect), Some(1.0));
    assert_eq!(map_index(500.0, rect, 4), Some(3));
}

#[test]
fn unmeasurable_track_maps_to_nothing() {
    let collapsed = TrackRect::new(0.0, 0.0);
    let domain = Domain::default();
    assert_eq!(pointer_percent(10.0, collapsed), None);
    assert_eq!(map_value(10.0, collapsed, &domain), None);
    assert_eq!(map_index(10.0, collapsed, 5), None);
    assert_eq!(pointer_percent(f64::NAN, TrackRect::new(0.0, 10.0)), None);
}

#[test]
fn value_is_snapped_to_step() {
    let domain = Domain::new(0.0, 100.0, 5.0).unwrap();
    let rect = TrackRect::new(0.0, 100.0);
    assert_eq!(map_value(12.0, rect, &domain), Some(10.0));
    assert_eq!(map_value(13.0, rect, &domain), Some(15.0));
}

#[test]
fn negative_domain_rounds_half_up() {
    let domain = Domain::new(-10.0, 10.0, 5.0).unwrap();
    assert_eq!(value_at(0.25, &domain), -5.0);
    // raw -2.5 -> -0.5 steps -> 0
    assert_eq!(value_at(0.375, &domain), 0.0);
}

#[test]
fn mapping_is_repeatable() {
    let rect = TrackRect::new(7.0, 313.0);
    let domain = Domain::new(3.0, 97.0, 0.25).unwrap();
    for x in [0.0, 41.3, 160.0, 319.9, 400.0] {
        assert_eq!(map_value(x, rect, &domain), map_value(x, rect, &domain));
        assert_eq!(map_index(x, rect, 9), map_index(x, rect, 9));
    }
}

#[test]
fn single_item_list_always_maps_to_zero() {
    let rect = TrackRect::new(0.0, 100.0);
    assert_eq!(map_index(0.0, rect, 1), Some(0));
    assert_eq!(map_index(100.0, rect, 1), Some(0));
}
