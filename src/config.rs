use reqwest::Url;

use crate::error::{FuelError, Result};

pub const DEFAULT_BASE_URL: &str = "https://sinaurb-app-bea-backend.nu5jqr.easypanel.host";

pub const STATS_PATH: &str = "/dashboard/stats";
pub const LOGS_PATH: &str = "/fuel-logs";

/// Number of log rows the dashboard shows.
pub const HISTORY_LIMIT: usize = 5;

pub const LITERS_QUICK_PICKS: [u32; 6] = [10, 20, 30, 40, 50, 60];

// Price quick-picks are stepped in whole cents to keep the sequence exact.
pub const PRICE_START_CENTS: u32 = 500;
pub const PRICE_BOUND_CENTS: u32 = 601;
pub const PRICE_STEP_CENTS: u32 = 10;

pub const DEFAULT_PRICE_PER_LITER: &str = "5.80";

/// Tolerance used when matching draft text against a quick-pick value.
pub const QUICK_PICK_EPSILON: f64 = 1e-3;

/// Label shown before the first stats snapshot arrives.
pub const PLACEHOLDER_PERIOD_LABEL: &str = "...";

pub const CONNECTIVITY_ERROR: &str = "failed to connect to backend";
pub const DELETE_FAILED_NOTICE: &str = "failed to delete record";
pub const SAVE_FAILED_NOTICE: &str = "failed to save record";
pub const DELETE_CONFIRM_PROMPT: &str = "Remove this record?";

pub fn stats_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), STATS_PATH)
}

pub fn logs_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), LOGS_PATH)
}

/// URL of a single record; `id` is percent-encoded as one path segment.
pub fn log_url(base: &str, id: &str) -> Result<Url> {
    let invalid = || FuelError::InvalidArgument(format!("Invalid base URL: {}", base));
    let mut url = Url::parse(&logs_url(base)).map_err(|_| invalid())?;
    url.path_segments_mut().map_err(|_| invalid())?.push(id);
    Ok(url)
}
