//! Fixed-value range selection: two indices into a list of distinct values.
//!
//! Selection works by position in the list, so the values keep the order
//! they were given in.

use crate::control::RangeControl;
use crate::error::RangeError;
use crate::format::{bound_label, format_amount, handle_label};
use crate::handle::Handle;
use crate::keys::KeyStep;
use crate::mapper::{map_index, TrackRect};
use crate::view::{HandleView, Highlight, MarkerView, SliderSnapshot};

/// Non-empty list of distinct finite values. Never empty, hence no
/// `is_empty`.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedDomain {
    values: Vec<f64>,
}

#[allow(clippy::len_without_is_empty)]
impl FixedDomain {
    pub fn new(values: Vec<f64>) -> Result<Self, RangeError> {
        if values.is_empty() {
            return Err(RangeError::EmptyValues);
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(RangeError::NonFiniteValue(i));
        }
        if let Some(i) = (1..values.len()).find(|&i| values[..i].contains(&values[i])) {
            return Err(RangeError::Duplicate(i));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Smallest value, wherever it sits in the list.
    pub fn lowest(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn highest(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Position of item `index` along the track, in percent.
    #[inline]
    pub fn percent_of(&self, index: usize) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }
        index as f64 / (self.values.len() - 1) as f64 * 100.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FixedRangeController {
    domain: FixedDomain,
    min_index: usize,
    max_index: usize,
}

impl FixedRangeController {
    /// Starts with the first and last values selected. A one-item list pins
    /// both handles to index 0 and every later move is rejected.
    pub fn new(domain: FixedDomain) -> Self {
        let max_index = domain.len() - 1;
        Self {
            domain,
            min_index: 0,
            max_index,
        }
    }

    pub fn min_index(&self) -> usize {
        self.min_index
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    pub fn index(&self, handle: Handle) -> usize {
        match handle {
            Handle::Min => self.min_index,
            Handle::Max => self.max_index,
        }
    }

    pub fn value(&self, handle: Handle) -> f64 {
        self.domain.values[self.index(handle)]
    }

    pub fn set_min_index(&mut self, index: usize) -> bool {
        if index >= self.max_index {
            return false;
        }
        let changed = index != self.min_index;
        self.min_index = index;
        changed
    }

    pub fn set_max_index(&mut self, index: usize) -> bool {
        if index <= self.min_index || index >= self.domain.len() {
            return false;
        }
        let changed = index != self.max_index;
        self.max_index = index;
        changed
    }

    pub fn set_index(&mut self, handle: Handle, index: usize) -> bool {
        match handle {
            Handle::Min => self.set_min_index(index),
            Handle::Max => self.set_max_index(index),
        }
    }

    /// Handle that a click at `index` moves: the min handle only when it is
    /// strictly closer; equal distance goes to the max handle.
    pub fn closer_handle(&self, index: usize) -> Handle {
        let to_min = index.abs_diff(self.min_index);
        let to_max = index.abs_diff(self.max_index);
        if to_min < to_max {
            Handle::Min
        } else {
            Handle::Max
        }
    }

    pub fn drag_to(&mut self, client_x: f64, rect: TrackRect, handle: Handle) -> bool {
        let Some(candidate) = map_index(client_x, rect, self.domain.len()) else {
            return false;
        };
        match handle {
            Handle::Min => match self.max_index.checked_sub(1) {
                Some(limit) => self.set_min_index(candidate.min(limit)),
                None => false,
            },
            Handle::Max => self.set_max_index(candidate.max(self.min_index + 1)),
        }
    }

    pub fn click_marker(&mut self, index: usize) -> bool {
        if index >= self.domain.len() {
            return false;
        }
        let handle = self.closer_handle(index);
        self.set_index(handle, index)
    }

    pub fn track_click(&mut self, client_x: f64, rect: TrackRect) -> bool {
        match map_index(client_x, rect, self.domain.len()) {
            Some(index) => self.click_marker(index),
            None => false,
        }
    }

    pub fn step_key(&mut self, key: &str, handle: Handle) -> bool {
        let Some(dir) = KeyStep::from_key(key) else {
            return false;
        };
        match dir.apply_index(self.index(handle)) {
            Some(index) => self.set_index(handle, index),
            None => false,
        }
    }

    pub fn handle_view(&self, handle: Handle) -> HandleView {
        let index = self.index(handle);
        let value = self.domain.values[index];
        HandleView {
            handle,
            value,
            min: self.domain.lowest(),
            max: self.domain.highest(),
            label: handle_label(handle, value),
            position: self.domain.percent_of(index),
        }
    }

    pub fn highlight(&self) -> Highlight {
        Highlight::between(
            self.domain.percent_of(self.min_index),
            self.domain.percent_of(self.max_index),
        )
    }

    pub fn markers(&self) -> Vec<MarkerView> {
        self.domain
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| MarkerView {
                index,
                value,
                label: format_amount(value),
                position: self.domain.percent_of(index),
                selected: index >= self.min_index && index <= self.max_index,
            })
            .collect()
    }
}

impl RangeControl for FixedRangeController {
    fn on_drag(&mut self, client_x: f64, rect: TrackRect, handle: Handle) -> bool {
        self.drag_to(client_x, rect, handle)
    }

    fn on_key(&mut self, key: &str, handle: Handle) -> bool {
        self.step_key(key, handle)
    }

    fn on_track_click(&mut self, client_x: f64, rect: TrackRect) -> bool {
        self.track_click(client_x, rect)
    }

    fn on_marker_click(&mut self, index: usize) -> bool {
        self.click_marker(index)
    }

    fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            handles: [self.handle_view(Handle::Min), self.handle_view(Handle::Max)],
            highlight: self.highlight(),
            markers: self.markers(),
            bound_labels: [
                bound_label(Handle::Min, Some(self.value(Handle::Min))),
                bound_label(Handle::Max, Some(self.value(Handle::Max))),
            ],
        }
    }
}

/// Bound labels for a possibly empty fetched list; empty shows placeholders.
pub fn fixed_bound_labels(controller: Option<&FixedRangeController>) -> [String; 2] {
    Handle::BOTH.map(|h| bound_label(h, controller.map(|c| c.value(h))))
}
