/// Direction a keyboard press moves the focused handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStep {
    Decrement,
    Increment,
}

impl KeyStep {
    /// Map a `KeyboardEvent.key` value; anything but the arrows is ignored.
    #[inline]
    pub fn from_key(key: &str) -> Option<KeyStep> {
        match key {
            "ArrowLeft" | "ArrowDown" => Some(KeyStep::Decrement),
            "ArrowRight" | "ArrowUp" => Some(KeyStep::Increment),
            _ => None,
        }
    }

    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            KeyStep::Decrement => -1.0,
            KeyStep::Increment => 1.0,
        }
    }

    /// Neighbouring index in this direction, `None` below zero.
    #[inline]
    pub fn apply_index(self, index: usize) -> Option<usize> {
        match self {
            KeyStep::Decrement => index.checked_sub(1),
            KeyStep::Increment => index.checked_add(1),
        }
    }
}
