// Mount-point configuration read from `data-*` attributes.
//
// Kept free of `web_sys` so it can be tested on the host; the caller passes
// an attribute getter (normally `Element::get_attribute`).

use anyhow::{anyhow, bail, Context};
use range_core::{
    RangeMode, RangeValues, DEFAULT_MIN_GAP, DEFAULT_STEP, FIXED_RANGE_VALUES_URL,
    RANGE_VALUES_URL,
};

pub const ATTR_MODE: &str = "data-range";
pub const ATTR_ENDPOINT: &str = "data-endpoint";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_SUBTITLE: &str = "data-subtitle";
pub const ATTR_STEP: &str = "data-step";
pub const ATTR_MIN_GAP: &str = "data-min-gap";
pub const ATTR_MIN: &str = "data-min";
pub const ATTR_MAX: &str = "data-max";
pub const ATTR_VALUES: &str = "data-values";

pub const DEFAULT_TITLE: &str = "Mango";
pub const NORMAL_SUBTITLE: &str = "Reusable Input Range";
pub const FIXED_SUBTITLE: &str = "Fixed Values Range";

/// Where a slider's values come from.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueSource {
    Remote(String),
    InlineRange(RangeValues),
    InlineFixed(Vec<f64>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MountConfig {
    pub mode: RangeMode,
    pub title: String,
    pub subtitle: String,
    pub step: f64,
    pub min_gap: f64,
    pub source: ValueSource,
}

fn number_attr(
    get: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> anyhow::Result<Option<f64>> {
    match get(name) {
        None => Ok(None),
        Some(raw) => {
            let v: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{name}=\"{raw}\" is not a number"))?;
            if !v.is_finite() {
                bail!("{name}=\"{raw}\" is not finite");
            }
            Ok(Some(v))
        }
    }
}

/// Comma separated list of numbers, e.g. `"1.99, 5.99, 10.99"`.
pub fn parse_value_list(raw: &str) -> anyhow::Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| anyhow!("\"{s}\" in {ATTR_VALUES} is not a number"))
        })
        .collect()
}

impl MountConfig {
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mode_raw = get(ATTR_MODE).ok_or_else(|| anyhow!("missing {ATTR_MODE}"))?;
        let mode: RangeMode = mode_raw.parse().map_err(|e: String| anyhow!(e))?;

        let step = number_attr(&get, ATTR_STEP)?.unwrap_or(DEFAULT_STEP);
        let min_gap = number_attr(&get, ATTR_MIN_GAP)?.unwrap_or(DEFAULT_MIN_GAP);
        let endpoint = get(ATTR_ENDPOINT).filter(|s| !s.trim().is_empty());

        let source = match mode {
            RangeMode::Normal => {
                if get(ATTR_VALUES).is_some() {
                    bail!("{ATTR_VALUES} only applies to fixed sliders");
                }
                let min = number_attr(&get, ATTR_MIN)?;
                let max = number_attr(&get, ATTR_MAX)?;
                match (min, max) {
                    (Some(min), Some(max)) => ValueSource::InlineRange(RangeValues { min, max }),
                    (None, None) => ValueSource::Remote(
                        endpoint.unwrap_or_else(|| RANGE_VALUES_URL.to_string()),
                    ),
                    _ => bail!("{ATTR_MIN} and {ATTR_MAX} must be given together"),
                }
            }
            RangeMode::Fixed => match get(ATTR_VALUES) {
                Some(raw) => ValueSource::InlineFixed(parse_value_list(&raw)?),
                None => ValueSource::Remote(
                    endpoint.unwrap_or_else(|| FIXED_RANGE_VALUES_URL.to_string()),
                ),
            },
        };

        let subtitle = get(ATTR_SUBTITLE).unwrap_or_else(|| {
            match mode {
                RangeMode::Normal => NORMAL_SUBTITLE,
                RangeMode::Fixed => FIXED_SUBTITLE,
            }
            .to_string()
        });

        Ok(Self {
            mode,
            title: get(ATTR_TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            subtitle,
            step,
            min_gap,
            source,
        })
    }
}
