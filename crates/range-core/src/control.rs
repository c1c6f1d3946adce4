use std::fmt;
use std::str::FromStr;

use crate::handle::Handle;
use crate::mapper::TrackRect;
use crate::view::SliderSnapshot;

/// Which slider variant a mount point hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeMode {
    /// Continuous min/max/step range.
    Normal,
    /// Snaps to a fixed list of values.
    Fixed,
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeMode::Normal => f.write_str("normal"),
            RangeMode::Fixed => f.write_str("fixed"),
        }
    }
}

impl FromStr for RangeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(RangeMode::Normal),
            "fixed" => Ok(RangeMode::Fixed),
            other => Err(format!("unknown range mode '{other}'")),
        }
    }
}

/// Interaction surface shared by both controllers.
///
/// Every method returns `true` only when the selection actually changed;
/// rejected candidates leave state untouched and report `false`.
pub trait RangeControl {
    fn on_drag(&mut self, client_x: f64, rect: TrackRect, handle: Handle) -> bool;

    fn on_key(&mut self, key: &str, handle: Handle) -> bool;

    /// Click on the bare track. Only the fixed slider reacts to this.
    fn on_track_click(&mut self, _client_x: f64, _rect: TrackRect) -> bool {
        false
    }

    /// Click on a labelled marker (fixed slider only).
    fn on_marker_click(&mut self, _index: usize) -> bool {
        false
    }

    /// Committed text from a handle's number input (continuous slider only).
    fn on_text_input(&mut self, _handle: Handle, _text: &str) -> bool {
        false
    }

    fn snapshot(&self) -> SliderSnapshot;
}
