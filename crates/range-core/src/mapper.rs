//! Pointer-to-position mapping.
//!
//! Everything here is a pure function of its inputs: the same pointer x over
//! the same track rectangle always yields the same percent, value and index.
//! The caller re-reads the track rectangle on every move so layout shifts
//! during a drag are picked up.

use crate::continuous::Domain;

/// Horizontal extent of a track element in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub width: f64,
}

impl TrackRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// A zero-width (collapsed or hidden) track cannot be mapped onto.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Normalized pointer position along the track, clamped to \[0, 1\].
///
/// Returns `None` when the track has no measurable width; callers skip the
/// update in that case.
#[inline]
pub fn pointer_percent(client_x: f64, rect: TrackRect) -> Option<f64> {
    if !rect.is_measurable() || !client_x.is_finite() {
        return None;
    }
    Some(((client_x - rect.left) / rect.width).clamp(0.0, 1.0))
}

/// Round half towards positive infinity, matching the browser's `Math.round`
/// so negative domains quantize the same way the DOM would.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    let r = x.round();
    if x < 0.0 && r - x == -0.5 {
        r + 1.0
    } else {
        r
    }
}

#[inline]
pub fn quantize(raw: f64, step: f64) -> f64 {
    round_half_up(raw / step) * step
}

/// Domain value at `percent`, snapped to the domain's step.
#[inline]
pub fn value_at(percent: f64, domain: &Domain) -> f64 {
    let raw = domain.min() + percent * domain.span();
    quantize(raw, domain.step())
}

/// Nearest item index at `percent` for a list of `count` items.
#[inline]
pub fn index_at(percent: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let last = (count - 1) as f64;
    round_half_up(percent.clamp(0.0, 1.0) * last) as usize
}

pub fn map_value(client_x: f64, rect: TrackRect, domain: &Domain) -> Option<f64> {
    pointer_percent(client_x, rect).map(|p| value_at(p, domain))
}

pub fn map_index(client_x: f64, rect: TrackRect, count: usize) -> Option<usize> {
    pointer_percent(client_x, rect).map(|p| index_at(p, count))
}
