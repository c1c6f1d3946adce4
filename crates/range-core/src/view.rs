//! Render-facing views.
//!
//! Controllers describe what to draw (value, bounds, label, position in
//! percent of the track width) and leave markup to the frontend, so the same
//! controller can back any skin.

use crate::handle::Handle;

/// Everything an accessible slider handle needs.
#[derive(Clone, Debug, PartialEq)]
pub struct HandleView {
    pub handle: Handle,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub label: String,
    /// Percent of track width, 0..=100.
    pub position: f64,
}

/// Selected span, as distances from the left and right edges in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Highlight {
    pub left: f64,
    pub right: f64,
}

impl Highlight {
    pub fn between(min_position: f64, max_position: f64) -> Self {
        Self {
            left: min_position,
            right: 100.0 - max_position,
        }
    }
}

/// A labelled stop on the fixed-value slider.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerView {
    pub index: usize,
    pub value: f64,
    pub label: String,
    pub position: f64,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderSnapshot {
    pub handles: [HandleView; 2],
    pub highlight: Highlight,
    /// Empty for the continuous slider.
    pub markers: Vec<MarkerView>,
    /// "Min: ..." / "Max: ..." texts.
    pub bound_labels: [String; 2],
}

impl SliderSnapshot {
    pub fn handle(&self, handle: Handle) -> &HandleView {
        match handle {
            Handle::Min => &self.handles[0],
            Handle::Max => &self.handles[1],
        }
    }
}

/// Position of `value` within `[min, max]` as a percentage.
#[inline]
pub fn percent_of(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    (value - min) / span * 100.0
}
