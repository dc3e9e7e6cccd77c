//! Text formatting for prices, listing cards and the estimate panel.

use serde::Serialize;

use crate::config::CURRENCY;
use crate::models::{EstimationResult, Listing};

/// Group digits in threes: `126000` -> `"126,000"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Grouped amount with up to three decimals, trailing zeros dropped:
/// `37800.5` -> `"37,800.5"`, `55000.00000001` -> `"55,000"`.
pub fn format_amount(value: f64) -> String {
    let millis = (value * 1000.0).round() as i64;
    let whole = millis / 1000;
    let frac = (millis % 1000).unsigned_abs();

    let mut out = if millis < 0 && whole == 0 {
        format!("-{}", group_thousands(whole))
    } else {
        group_thousands(whole)
    };
    if frac != 0 {
        let decimals = format!("{frac:03}");
        out.push('.');
        out.push_str(decimals.trim_end_matches('0'));
    }
    out
}

/// `"QAR 126,000"`.
pub fn format_price(value: i64) -> String {
    format!("{CURRENCY} {}", group_thousands(value))
}

/// `"460,000 km"`.
pub fn format_mileage(km: i64) -> String {
    format!("{} km", group_thousands(km))
}

/// Card title for a listing, `"Toyota Land Cruiser"`.
pub fn listing_heading(listing: &Listing) -> String {
    format!("{} {}", listing.brand, listing.model)
}

// ---------------------------------------------------------------------------
// ListingCard
// ---------------------------------------------------------------------------

/// Display strings for one listing in the results grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingCard {
    pub heading: String,
    pub subtitle: String,
    pub price: String,
    pub year: String,
    pub mileage: String,
    pub fuel_type: String,
    pub city: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        Self {
            heading: listing_heading(listing),
            subtitle: listing.title.clone(),
            price: format_price(listing.price),
            year: listing.year.to_string(),
            mileage: format_mileage(listing.mileage_km),
            fuel_type: listing.fuel_type.clone(),
            city: listing.city.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// EstimateSummary
// ---------------------------------------------------------------------------

/// The estimate panel's three figures. The band figures are not rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateSummary {
    pub low: String,
    pub average: String,
    pub high: String,
}

pub fn estimate_summary(result: &EstimationResult) -> EstimateSummary {
    EstimateSummary {
        low: format!("{CURRENCY} {}", format_amount(result.low_bound)),
        average: format_price(result.price),
        high: format!("{CURRENCY} {}", format_amount(result.high_bound)),
    }
}
