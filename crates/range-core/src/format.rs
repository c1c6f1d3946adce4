use crate::constants::{CURRENCY_SUFFIX, DECIMAL_PLACES, PLACEHOLDER_VALUE};
use crate::handle::Handle;

/// Two decimals, decimal comma, trailing currency marker: `10` -> `"10,00 €"`.
pub fn format_amount(value: f64) -> String {
    let scale = 10f64.powi(DECIMAL_PLACES as i32);
    let mut rounded = (value * scale).round() / scale;
    // avoid "-0,00"
    if rounded == 0.0 {
        rounded = 0.0;
    }
    let digits = format!("{:.*}", DECIMAL_PLACES, rounded).replacen('.', ",", 1);
    format!("{digits} {CURRENCY_SUFFIX}")
}

/// Accessible handle label, e.g. `"Minimum value: 10,00 €"`.
pub fn handle_label(handle: Handle, value: f64) -> String {
    format!("{}: {}", handle.aria_prefix(), format_amount(value))
}

/// Bound label shown under the track; `None` renders the placeholder.
pub fn bound_label(handle: Handle, value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}: {}", handle.short_prefix(), format_amount(v)),
        None => format!("{}: {}", handle.short_prefix(), PLACEHOLDER_VALUE),
    }
}

/// Parse user text entry. Accepts a decimal comma; blank or garbage is `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Plain number for inputs and ARIA attributes: up to six decimals, trailing
/// zeros dropped, so a float-step artefact like `0.30000000000000004` reads
/// `0.3`.
pub fn plain_number(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
