use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing: A single car-for-sale record from a marketplace
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub source: String,
    #[serde(rename = "listing_title")]
    pub title: String,
    pub price: i64,
    pub year: i32,
    pub mileage_km: i64,
    pub description: String,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub transmission: String,
    pub city: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// SearchQuery: Listing search form values
// ---------------------------------------------------------------------------

/// Listing search criteria.
///
/// All fields are optional. Empty strings behave like `None`, and year bounds
/// that do not parse as an integer impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_from: Option<String>,
    pub year_to: Option<String>,
}

impl SearchQuery {
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn years(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.year_from = Some(from.into());
        self.year_to = Some(to.into());
        self
    }
}
