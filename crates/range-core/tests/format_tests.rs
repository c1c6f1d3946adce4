// Host-side tests for value formatting and handle names.

use range_core::*;

#[test]
fn amounts_always_show_two_decimals_and_currency() {
    assert_eq!(format_amount(10.0), "10,00 €");
    assert_eq!(format_amount(0.0), "0,00 €");
    assert_eq!(format_amount(1.99), "1,99 €");
    assert_eq!(format_amount(10.456), "10,46 €");
    assert_eq!(format_amount(7.1), "7,10 €");
}

#[test]
fn tiny_negative_does_not_print_negative_zero() {
    assert_eq!(format_amount(-0.001), "0,00 €");
    assert_eq!(format_amount(-2.5), "-2,50 €");
}

#[test]
fn labels_use_handle_prefixes() {
    assert_eq!(handle_label(Handle::Min, 10.0), "Minimum value: 10,00 €");
    assert_eq!(handle_label(Handle::Max, 99.5), "Maximum value: 99,50 €");
    assert_eq!(bound_label(Handle::Min, Some(30.0)), "Min: 30,00 €");
    assert_eq!(bound_label(Handle::Max, None), "Max: -");
}

#[test]
fn parse_amount_accepts_comma_and_rejects_garbage() {
    assert_eq!(parse_amount("10"), Some(10.0));
    assert_eq!(parse_amount(" 3,25 "), Some(3.25));
    assert_eq!(parse_amount("4.5"), Some(4.5));
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("ten"), None);
    assert_eq!(parse_amount("inf"), None);
    assert_eq!(parse_amount("NaN"), None);
}

#[test]
fn handle_and_mode_names_parse() {
    assert_eq!("min".parse::<Handle>(), Ok(Handle::Min));
    assert_eq!(Handle::Max.to_string(), "max");
    assert!("middle".parse::<Handle>().is_err());
    assert_eq!("fixed".parse::<RangeMode>(), Ok(RangeMode::Fixed));
    assert_eq!(" normal ".parse::<RangeMode>(), Ok(RangeMode::Normal));
    assert!("slider".parse::<RangeMode>().is_err());
}

#[test]
fn key_mapping() {
    assert_eq!(KeyStep::from_key("ArrowLeft"), Some(KeyStep::Decrement));
    assert_eq!(KeyStep::from_key("ArrowDown"), Some(KeyStep::Decrement));
    assert_eq!(KeyStep::from_key("ArrowRight"), Some(KeyStep::Increment));
    assert_eq!(KeyStep::from_key("ArrowUp"), Some(KeyStep::Increment));
    assert_eq!(KeyStep::from_key("Tab"), None);
    assert_eq!(KeyStep::Decrement.apply_index(0), None);
    assert_eq!(KeyStep::Increment.apply_index(2), Some(3));
}

#[test]
fn plain_number_trims_float_noise() {
    assert_eq!(plain_number(25.0), "25");
    assert_eq!(plain_number(0.1 + 0.2), "0.3");
    assert_eq!(plain_number(12.5), "12.5");
    assert_eq!(plain_number(-0.0000001), "0");
    assert_eq!(plain_number(-3.25), "-3.25");
    assert_eq!(plain_number(100.0), "100");
}
