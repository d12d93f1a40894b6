//! Form draft tests: quick-pick generation, approximate matching and
//! submit-time conversion.

mod common;

use fuelcontrol_sdk::form::{approx_eq, liters_options, parse_number, price_options};
use fuelcontrol_sdk::{DraftEdit, DraftField, FormDraft, FuelError, FuelType};

fn draft() -> FormDraft {
    FormDraft::new(common::date("2024-05-10"))
}

// ---------------------------------------------------------------------------
// price_options / liters_options
// ---------------------------------------------------------------------------

#[test]
fn price_options_run_from_five_to_six() {
    let prices = price_options();
    assert_eq!(prices.len(), 11);
    assert_eq!(prices.first().unwrap(), "5.00");
    assert_eq!(prices.last().unwrap(), "6.00");
    assert!(!prices.iter().any(|p| p == "6.01"));
}

#[test]
fn price_options_step_by_exactly_ten_cents() {
    let cents: Vec<i64> = price_options()
        .iter()
        .map(|p| (p.parse::<f64>().unwrap() * 100.0).round() as i64)
        .collect();
    for pair in cents.windows(2) {
        assert_eq!(pair[1] - pair[0], 10);
    }
}

#[test]
fn price_options_have_two_decimals_and_no_duplicates() {
    let prices = price_options();
    for p in &prices {
        assert_eq!(p.split('.').nth(1).unwrap().len(), 2, "{}", p);
    }
    let mut deduped = prices.clone();
    deduped.dedup();
    assert_eq!(deduped, prices);
    assert!(prices.contains(&"5.80".to_string()));
}

#[test]
fn liters_options_are_fixed() {
    assert_eq!(liters_options(), vec!["10", "20", "30", "40", "50", "60"]);
}

// ---------------------------------------------------------------------------
// approx_eq
// ---------------------------------------------------------------------------

#[test]
fn approx_eq_ignores_trailing_zeros() {
    assert!(approx_eq("5.8", "5.80"));
    assert!(approx_eq("40", "40.000"));
    assert!(approx_eq(" 5.80 ", "5.8"));
}

#[test]
fn approx_eq_uses_a_tight_tolerance() {
    assert!(approx_eq("5.8004", "5.80"));
    assert!(!approx_eq("5.81", "5.80"));
    assert!(!approx_eq("5.802", "5.80"));
}

#[test]
fn approx_eq_rejects_non_numeric_text() {
    assert!(!approx_eq("", "0"));
    assert!(!approx_eq("abc", "5.80"));
    assert!(!approx_eq("NaN", "NaN"));
}

#[test]
fn parse_number_handles_blank_and_garbage() {
    assert_eq!(parse_number("42.5"), Some(42.5));
    assert_eq!(parse_number("   "), None);
    assert_eq!(parse_number("12,5"), None);
    assert_eq!(parse_number("inf"), None);
}

// ---------------------------------------------------------------------------
// FormDraft editing
// ---------------------------------------------------------------------------

#[test]
fn new_draft_has_defaults() {
    let d = draft();
    assert_eq!(d.fuel_type, FuelType::Gasoline);
    assert_eq!(d.liters, "");
    assert_eq!(d.price_per_liter, "5.80");
    assert_eq!(d.date, "2024-05-10");
}

#[test]
fn set_field_overwrites_without_validation() {
    let mut d = draft();
    d.set_field(DraftField::Liters, "not a number");
    d.set_field(DraftField::PricePerLiter, "");
    d.set_field(DraftField::Date, "2024-06-01");
    assert_eq!(d.liters, "not a number");
    assert_eq!(d.price_per_liter, "");
    assert_eq!(d.date, "2024-06-01");
}

#[test]
fn draft_field_parses_input_names() {
    assert_eq!("liters".parse::<DraftField>().unwrap(), DraftField::Liters);
    assert_eq!(
        "pricePerLiter".parse::<DraftField>().unwrap(),
        DraftField::PricePerLiter
    );
    assert_eq!("date".parse::<DraftField>().unwrap(), DraftField::Date);
    assert!(matches!(
        "type".parse::<DraftField>(),
        Err(FuelError::InvalidArgument(_))
    ));
}

#[test]
fn fuel_type_selection_is_exclusive() {
    let mut d = draft();
    d.select_fuel_type(FuelType::Ethanol);
    assert_eq!(d.fuel_type, FuelType::Ethanol);
    d.apply(DraftEdit::SelectFuelType(FuelType::Gasoline));
    assert_eq!(d.fuel_type, FuelType::Gasoline);
}

#[test]
fn picking_liters_highlights_only_that_suggestion() {
    let mut d = draft();
    d.pick_liters(30);
    assert_eq!(d.liters, "30");
    let selected: Vec<String> = d
        .liters_picks()
        .into_iter()
        .filter(|p| p.selected)
        .map(|p| p.value)
        .collect();
    assert_eq!(selected, vec!["30"]);
}

#[test]
fn typed_price_matches_suggestion_by_value() {
    let mut d = draft();
    d.set_field(DraftField::PricePerLiter, "5.8");
    let selected: Vec<String> = d
        .price_picks()
        .into_iter()
        .filter(|p| p.selected)
        .map(|p| p.value)
        .collect();
    assert_eq!(selected, vec!["5.80"]);
}

#[test]
fn off_grid_price_selects_nothing() {
    let mut d = draft();
    d.pick_price("5.85");
    assert!(d.price_picks().iter().all(|p| !p.selected));
    assert!(d.liters_picks().iter().all(|p| !p.selected));
}

#[test]
fn clear_liters_keeps_other_fields() {
    let mut d = draft();
    d.apply(DraftEdit::PickLiters(40));
    d.apply(DraftEdit::PickPrice("6.00".into()));
    d.apply(DraftEdit::SelectFuelType(FuelType::Ethanol));
    d.apply(DraftEdit::ClearLiters);
    assert_eq!(d.liters, "");
    assert_eq!(d.price_per_liter, "6.00");
    assert_eq!(d.fuel_type, FuelType::Ethanol);
    assert_eq!(d.date, "2024-05-10");
}

// ---------------------------------------------------------------------------
// to_request
// ---------------------------------------------------------------------------

#[test]
fn to_request_parses_numbers() {
    let mut d = draft();
    d.set_field(DraftField::Liters, "35.5");
    d.set_field(DraftField::PricePerLiter, "5.9");
    let req = d.to_request().unwrap();
    assert_eq!(req.fuel_type, FuelType::Gasoline);
    assert_eq!(req.liters, 35.5);
    assert_eq!(req.price_per_liter, 5.9);
    assert_eq!(req.date, common::date("2024-05-10"));
}

#[test]
fn to_request_rejects_empty_or_invalid_liters() {
    let d = draft();
    assert!(matches!(d.to_request(), Err(FuelError::InvalidArgument(_))));

    let mut d = draft();
    d.set_field(DraftField::Liters, "forty");
    assert!(matches!(d.to_request(), Err(FuelError::InvalidArgument(_))));
}

#[test]
fn to_request_falls_back_to_default_price() {
    let mut d = draft();
    d.set_field(DraftField::Liters, "20");
    d.set_field(DraftField::PricePerLiter, "abc");
    assert_eq!(d.to_request().unwrap().price_per_liter, 5.8);

    d.set_field(DraftField::PricePerLiter, "");
    assert_eq!(d.to_request().unwrap().price_per_liter, 5.8);
}

#[test]
fn to_request_rejects_bad_date() {
    let mut d = draft();
    d.set_field(DraftField::Liters, "20");
    d.set_field(DraftField::Date, "10/05/2024");
    assert!(matches!(d.to_request(), Err(FuelError::InvalidArgument(_))));
}

#[test]
fn request_serializes_numbers_and_wire_names() {
    let mut d = draft();
    d.select_fuel_type(FuelType::Ethanol);
    d.set_field(DraftField::Liters, "12.5");
    let json = serde_json::to_value(d.to_request().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "etanol",
            "liters": 12.5,
            "pricePerLiter": 5.8,
            "date": "2024-05-10"
        })
    );
}
