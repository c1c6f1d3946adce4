use thiserror::Error;

/// Reasons a domain or controller could not be built.
///
/// Interaction never produces these: an out-of-range candidate is simply
/// rejected by the controller. They only guard construction from
/// configuration or remote data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("domain bounds must be finite (min={min}, max={max})")]
    NonFiniteBounds { min: f64, max: f64 },
    #[error("domain min {min} must be below max {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f64),
    #[error("minimum gap must be finite and positive, got {0}")]
    InvalidGap(f64),
    #[error("minimum gap {gap} does not fit in domain span {span}")]
    GapTooWide { gap: f64, span: f64 },
    #[error("fixed value list is empty")]
    EmptyValues,
    #[error("fixed value at index {0} is not a finite number")]
    NonFiniteValue(usize),
    #[error("fixed value at index {0} repeats an earlier value")]
    Duplicate(usize),
}
