// Host-side tests for mount configuration parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;
use range_core::{RangeMode, RangeValues, FIXED_RANGE_VALUES_URL, RANGE_VALUES_URL};
use std::collections::HashMap;

fn parse(attrs: &[(&str, &str)]) -> anyhow::Result<MountConfig> {
    let map: HashMap<String, String> = attrs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    MountConfig::from_attrs(|name| map.get(name).cloned())
}

#[test]
fn normal_defaults_to_remote_endpoint() {
    let c = parse(&[(ATTR_MODE, "normal")]).unwrap();
    assert_eq!(c.mode, RangeMode::Normal);
    assert_eq!(c.source, ValueSource::Remote(RANGE_VALUES_URL.to_string()));
    assert_eq!(c.title, DEFAULT_TITLE);
    assert_eq!(c.subtitle, NORMAL_SUBTITLE);
    assert_eq!(c.step, 1.0);
    assert_eq!(c.min_gap, 3.0);
}

#[test]
fn fixed_defaults_to_remote_endpoint() {
    let c = parse(&[(ATTR_MODE, "fixed")]).unwrap();
    assert_eq!(c.mode, RangeMode::Fixed);
    assert_eq!(c.source, ValueSource::Remote(FIXED_RANGE_VALUES_URL.to_string()));
    assert_eq!(c.subtitle, FIXED_SUBTITLE);
}

#[test]
fn custom_endpoint_and_titles() {
    let c = parse(&[
        (ATTR_MODE, "normal"),
        (ATTR_ENDPOINT, "https://example.test/range"),
        (ATTR_TITLE, "Prices"),
        (ATTR_SUBTITLE, "Pick a band"),
        (ATTR_STEP, "0.5"),
        (ATTR_MIN_GAP, "2"),
    ])
    .unwrap();
    assert_eq!(c.source, ValueSource::Remote("https://example.test/range".into()));
    assert_eq!(c.title, "Prices");
    assert_eq!(c.subtitle, "Pick a band");
    assert_eq!(c.step, 0.5);
    assert_eq!(c.min_gap, 2.0);
}

#[test]
fn blank_endpoint_falls_back_to_default() {
    let c = parse(&[(ATTR_MODE, "fixed"), (ATTR_ENDPOINT, "  ")]).unwrap();
    assert_eq!(c.source, ValueSource::Remote(FIXED_RANGE_VALUES_URL.to_string()));
}

#[test]
fn inline_bounds_skip_fetch() {
    let c = parse(&[(ATTR_MODE, "normal"), (ATTR_MIN, "10"), (ATTR_MAX, " 90 ")]).unwrap();
    assert_eq!(
        c.source,
        ValueSource::InlineRange(RangeValues { min: 10.0, max: 90.0 })
    );
}

#[test]
fn inline_values_skip_fetch() {
    let c = parse(&[(ATTR_MODE, "fixed"), (ATTR_VALUES, "1.99, 5.99,10.99")]).unwrap();
    assert_eq!(c.source, ValueSource::InlineFixed(vec![1.99, 5.99, 10.99]));
}

#[test]
fn rejects_bad_attributes() {
    assert!(parse(&[]).is_err());
    assert!(parse(&[(ATTR_MODE, "vertical")]).is_err());
    assert!(parse(&[(ATTR_MODE, "normal"), (ATTR_MIN, "10")]).is_err());
    assert!(parse(&[(ATTR_MODE, "normal"), (ATTR_STEP, "abc")]).is_err());
    assert!(parse(&[(ATTR_MODE, "normal"), (ATTR_MIN_GAP, "inf")]).is_err());
    assert!(parse(&[(ATTR_MODE, "normal"), (ATTR_VALUES, "1,2")]).is_err());
    assert!(parse(&[(ATTR_MODE, "fixed"), (ATTR_VALUES, "1,two,3")]).is_err());
}

#[test]
fn value_list_ignores_blank_entries() {
    assert_eq!(parse_value_list("1, ,2,").unwrap(), vec![1.0, 2.0]);
    assert!(parse_value_list("").unwrap().is_empty());
    assert!(parse_value_list("1,NaN").is_err());
}
