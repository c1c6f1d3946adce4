//! Remote value payloads.
//!
//! The endpoint answers `{"min": number, "max": number}` for the continuous
//! slider and `{"rangeValues": number[]}` for the fixed one. Parsing is kept
//! here, away from the fetch itself, so it can be exercised on the host.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::constants::{FIXED_RANGE_VALUES_ERROR, INVALID_RANGE_VALUES_ERROR, RANGE_VALUES_ERROR};
use crate::continuous::Domain;
use crate::control::RangeMode;
use crate::fixed::FixedDomain;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    /// Network failure or non-success status.
    #[error("request failed: {0}")]
    Request(String),
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("invalid range values: {0}")]
    InvalidValues(String),
}

impl PayloadError {
    /// Static text shown to the user in place of the slider.
    pub fn user_message(&self, mode: RangeMode) -> &'static str {
        match (self, mode) {
            (PayloadError::InvalidValues(_), RangeMode::Normal) => INVALID_RANGE_VALUES_ERROR,
            (_, RangeMode::Normal) => RANGE_VALUES_ERROR,
            (_, RangeMode::Fixed) => FIXED_RANGE_VALUES_ERROR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeValues {
    pub min: f64,
    pub max: f64,
}

impl RangeValues {
    pub fn into_domain(self, step: f64) -> Result<Domain, PayloadError> {
        Domain::new(self.min, self.max, step).map_err(|e| {
            log::debug!("[payload] rejected range values: {e}");
            PayloadError::InvalidValues(e.to_string())
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedRangeValues {
    pub range_values: Vec<f64>,
}

impl FixedRangeValues {
    /// `Ok(None)` for an empty list, which the display layer shows as
    /// placeholders rather than an error.
    pub fn into_domain(self) -> Result<Option<FixedDomain>, PayloadError> {
        if self.range_values.is_empty() {
            return Ok(None);
        }
        FixedDomain::new(self.range_values).map(Some).map_err(|e| {
            log::debug!("[payload] rejected fixed values: {e}");
            PayloadError::InvalidValues(e.to_string())
        })
    }
}

/// Parse a continuous payload. `min`/`max` must be JSON numbers; strings
/// such as `"10"` are rejected rather than coerced.
pub fn parse_range_values(body: &str) -> Result<RangeValues, PayloadError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| PayloadError::Malformed(e.to_string()))?;
    let field = |name: &str| -> Result<f64, PayloadError> {
        value
            .get(name)
            .and_then(Value::as_f64)
            .ok_or_else(|| PayloadError::InvalidValues(format!("'{name}' is not a number")))
    };
    Ok(RangeValues {
        min: field("min")?,
        max: field("max")?,
    })
}

pub fn parse_fixed_values(body: &str) -> Result<FixedRangeValues, PayloadError> {
    serde_json::from_str(body).map_err(|e| PayloadError::Malformed(e.to_string()))
}
