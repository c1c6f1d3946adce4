//! Continuous (min/max/step) range selection.

use crate::constants::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP};
use crate::control::RangeControl;
use crate::error::RangeError;
use crate::format::{bound_label, handle_label, parse_amount};
use crate::handle::Handle;
use crate::keys::KeyStep;
use crate::mapper::{map_value, TrackRect};
use crate::view::{percent_of, HandleView, Highlight, SliderSnapshot};

/// Bounds and quantum of a continuous slider. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
    step: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFiniteBounds { min, max });
        }
        if min >= max {
            return Err(RangeError::InvertedBounds { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(RangeError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn percent_of(&self, value: f64) -> f64 {
        percent_of(value, self.min, self.max)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
        }
    }
}

fn check_gap(domain: &Domain, min_gap: f64) -> Result<(), RangeError> {
    if !min_gap.is_finite() || min_gap <= 0.0 {
        return Err(RangeError::InvalidGap(min_gap));
    }
    if min_gap > domain.span() {
        return Err(RangeError::GapTooWide {
            gap: min_gap,
            span: domain.span(),
        });
    }
    Ok(())
}

/// Two-handle selection over a [`Domain`] keeping `min_gap` between handles.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeController {
    domain: Domain,
    min_gap: f64,
    min_value: f64,
    max_value: f64,
}

impl RangeController {
    /// Starts with the whole domain selected.
    pub fn new(domain: Domain, min_gap: f64) -> Result<Self, RangeError> {
        check_gap(&domain, min_gap)?;
        Ok(Self {
            domain,
            min_gap,
            min_value: domain.min,
            max_value: domain.max,
        })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn value(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Min => self.min_value,
            Handle::Max => self.max_value,
        }
    }

    pub fn set_min(&mut self, candidate: f64) -> bool {
        if !candidate.is_finite()
            || candidate < self.domain.min
            || candidate > self.max_value - self.min_gap
        {
            return false;
        }
        let changed = candidate != self.min_value;
        self.min_value = candidate;
        changed
    }

    pub fn set_max(&mut self, candidate: f64) -> bool {
        if !candidate.is_finite()
            || candidate > self.domain.max
            || candidate < self.min_value + self.min_gap
        {
            return false;
        }
        let changed = candidate != self.max_value;
        self.max_value = candidate;
        changed
    }

    pub fn set(&mut self, handle: Handle, candidate: f64) -> bool {
        match handle {
            Handle::Min => self.set_min(candidate),
            Handle::Max => self.set_max(candidate),
        }
    }

    /// Numeric text entry for one handle. Unparsable text is ignored.
    pub fn set_from_input(&mut self, handle: Handle, text: &str) -> bool {
        match parse_amount(text) {
            Some(v) => self.set(handle, v),
            None => false,
        }
    }

    /// Pull the mapped value one step short of the other handle before
    /// validating, so a single large pointer jump cannot cross over.
    pub fn drag_to(&mut self, client_x: f64, rect: TrackRect, handle: Handle) -> bool {
        let Some(new_value) = map_value(client_x, rect, &self.domain) else {
            return false;
        };
        let step = self.domain.step;
        match handle {
            Handle::Min => self.set_min(new_value.min(self.max_value - step)),
            Handle::Max => self.set_max(new_value.max(self.min_value + step)),
        }
    }

    pub fn step_key(&mut self, key: &str, handle: Handle) -> bool {
        let Some(dir) = KeyStep::from_key(key) else {
            return false;
        };
        let candidate = self.value(handle) + dir.signum() * self.domain.step;
        self.set(handle, candidate)
    }

    pub fn handle_view(&self, handle: Handle) -> HandleView {
        let value = self.value(handle);
        HandleView {
            handle,
            value,
            min: self.domain.min,
            max: self.domain.max,
            label: handle_label(handle, value),
            position: self.domain.percent_of(value),
        }
    }

    pub fn highlight(&self) -> Highlight {
        Highlight::between(
            self.domain.percent_of(self.min_value),
            self.domain.percent_of(self.max_value),
        )
    }
}

impl RangeControl for RangeController {
    fn on_drag(&mut self, client_x: f64, rect: TrackRect, handle: Handle) -> bool {
        self.drag_to(client_x, rect, handle)
    }

    fn on_key(&mut self, key: &str, handle: Handle) -> bool {
        self.step_key(key, handle)
    }

    fn on_text_input(&mut self, handle: Handle, text: &str) -> bool {
        self.set_from_input(handle, text)
    }

    fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            handles: [self.handle_view(Handle::Min), self.handle_view(Handle::Max)],
            highlight: self.highlight(),
            markers: Vec::new(),
            bound_labels: [
                bound_label(Handle::Min, Some(self.min_value)),
                bound_label(Handle::Max, Some(self.max_value)),
            ],
        }
    }
}
