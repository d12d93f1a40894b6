//! Draft state for the "new record" form and its quick-pick suggestions.
//!
//! The numeric inputs stay free text until submit. Quick-pick buttons are
//! matched against that text by numeric value, so `"5.8"` selects the
//! `"5.80"` suggestion.

use chrono::{Local, NaiveDate};
use std::str::FromStr;

use crate::config;
use crate::error::{FuelError, Result};
use crate::models::lenient::parse_calendar_date;
use crate::models::{CreateLogRequest, FuelType};

// ---------------------------------------------------------------------------
// Numeric matching
// ---------------------------------------------------------------------------

/// Parse free text as a finite number. Blank or non-numeric text is `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether two pieces of text denote the same number within
/// [`QUICK_PICK_EPSILON`](config::QUICK_PICK_EPSILON).
///
/// Text that does not parse as a number never matches.
pub fn approx_eq(a: &str, b: &str) -> bool {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => (x - y).abs() < config::QUICK_PICK_EPSILON,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Quick-pick sets
// ---------------------------------------------------------------------------

/// Liters suggestions as display text.
pub fn liters_options() -> Vec<String> {
    config::LITERS_QUICK_PICKS
        .iter()
        .map(|l| l.to_string())
        .collect()
}

/// Price suggestions as two-decimal text, stepped in whole cents.
pub fn price_options() -> Vec<String> {
    (config::PRICE_START_CENTS..=config::PRICE_BOUND_CENTS)
        .step_by(config::PRICE_STEP_CENTS as usize)
        .map(|cents| format!("{}.{:02}", cents / 100, cents % 100))
        .collect()
}

/// One suggestion button and whether it matches the current draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickPick {
    pub value: String,
    pub selected: bool,
}

fn mark(options: Vec<String>, current: &str) -> Vec<QuickPick> {
    options
        .into_iter()
        .map(|value| QuickPick {
            selected: approx_eq(current, &value),
            value,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// DraftField
// ---------------------------------------------------------------------------

/// The free-text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Liters,
    PricePerLiter,
    Date,
}

impl FromStr for DraftField {
    type Err = FuelError;

    /// Accepts the input names used by the form (`liters`, `pricePerLiter`,
    /// `date`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "liters" => Ok(DraftField::Liters),
            "pricePerLiter" => Ok(DraftField::PricePerLiter),
            "date" => Ok(DraftField::Date),
            other => Err(FuelError::InvalidArgument(format!(
                "Unknown form field: {}",
                other
            ))),
        }
    }
}

/// An edit applied to the draft through the store.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    SetField(DraftField, String),
    SelectFuelType(FuelType),
    PickLiters(u32),
    PickPrice(String),
    ClearLiters,
}

// ---------------------------------------------------------------------------
// FormDraft
// ---------------------------------------------------------------------------

/// The in-progress create request.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub fuel_type: FuelType,
    pub liters: String,
    pub price_per_liter: String,
    pub date: String,
}

impl FormDraft {
    /// A fresh draft dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            fuel_type: FuelType::default(),
            liters: String::new(),
            price_per_liter: config::DEFAULT_PRICE_PER_LITER.to_string(),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Overwrite a text field. No validation happens here.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Liters => self.liters = value,
            DraftField::PricePerLiter => self.price_per_liter = value,
            DraftField::Date => self.date = value,
        }
    }

    pub fn select_fuel_type(&mut self, fuel_type: FuelType) {
        self.fuel_type = fuel_type;
    }

    pub fn pick_liters(&mut self, amount: u32) {
        self.liters = amount.to_string();
    }

    pub fn pick_price(&mut self, price: impl Into<String>) {
        self.price_per_liter = price.into();
    }

    /// Empty the liters field, keeping everything else.
    pub fn clear_liters(&mut self) {
        self.liters.clear();
    }

    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::SetField(field, value) => self.set_field(field, value),
            DraftEdit::SelectFuelType(t) => self.select_fuel_type(t),
            DraftEdit::PickLiters(amount) => self.pick_liters(amount),
            DraftEdit::PickPrice(price) => self.pick_price(price),
            DraftEdit::ClearLiters => self.clear_liters(),
        }
    }

    /// Liters suggestions, marked against the current liters text.
    pub fn liters_picks(&self) -> Vec<QuickPick> {
        mark(liters_options(), &self.liters)
    }

    /// Price suggestions, marked against the current price text.
    pub fn price_picks(&self) -> Vec<QuickPick> {
        mark(price_options(), &self.price_per_liter)
    }

    /// Convert the draft into a request body.
    ///
    /// Liters must be numeric. An unparsable price falls back to the default
    /// price instead of blocking the submit.
    pub fn to_request(&self) -> Result<CreateLogRequest> {
        let liters = parse_number(&self.liters).ok_or_else(|| {
            FuelError::InvalidArgument(format!("liters must be a number, got {:?}", self.liters))
        })?;
        let price_per_liter = parse_number(&self.price_per_liter)
            .or_else(|| parse_number(config::DEFAULT_PRICE_PER_LITER))
            .unwrap_or_default();
        let date = parse_calendar_date(&self.date).ok_or_else(|| {
            FuelError::InvalidArgument(format!("date must be YYYY-MM-DD, got {:?}", self.date))
        })?;
        Ok(CreateLogRequest {
            fuel_type: self.fuel_type,
            liters,
            price_per_liter,
            date,
        })
    }
}

impl Default for FormDraft {
    /// A fresh draft dated today in local time.
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
