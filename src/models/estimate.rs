use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EstimationInput: Estimate form values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: String,
}

impl EstimationInput {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year: year.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// EstimationResult: Estimated price with a ±10% band
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub price: i64,
    pub low_bound: f64,
    pub high_bound: f64,
}
