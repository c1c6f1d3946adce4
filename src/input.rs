use range_core::TrackRect;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Horizontal pointer position of a mouse or single-touch event.
///
/// A touch event without active touches (e.g. `touchend`) has no position.
#[inline]
pub fn event_client_x(ev: &web::Event) -> Option<f64> {
    if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
        return Some(mouse.client_x() as f64);
    }
    ev.dyn_ref::<web::TouchEvent>()
        .and_then(|touch| touch.touches().get(0))
        .map(|t| t.client_x() as f64)
}

/// Current geometry of the track. Queried on every event, never cached.
#[inline]
pub fn track_rect(track: &web::Element) -> TrackRect {
    let rect = track.get_bounding_client_rect();
    TrackRect::new(rect.left(), rect.width())
}
