//! Lookups against the static brand and make tables.

use crate::config::{BRAND_MODELS, ESTIMATOR_MAKES, TREND_MAKES};

/// Query interface for the brand to model table and the form make pickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrandQuery;

impl BrandQuery {
    pub fn new() -> Self {
        Self
    }

    /// All known brands, sorted alphabetically.
    pub fn brands(&self) -> Vec<&'static str> {
        let mut brands: Vec<&'static str> = BRAND_MODELS.iter().map(|(b, _)| *b).collect();
        brands.sort_unstable();
        brands
    }

    /// Models offered for `brand`; empty for an unknown brand.
    ///
    /// The lookup is exact, matching how the brand picker supplies its value.
    pub fn models(&self, brand: &str) -> &'static [&'static str] {
        BRAND_MODELS
            .iter()
            .find(|(b, _)| *b == brand)
            .map(|(_, models)| *models)
            .unwrap_or(&[])
    }

    pub fn contains(&self, brand: &str) -> bool {
        BRAND_MODELS.iter().any(|(b, _)| *b == brand)
    }

    /// `(value, label)` pairs for the estimate form.
    pub fn estimator_makes(&self) -> &'static [(&'static str, &'static str)] {
        ESTIMATOR_MAKES
    }

    /// Makes offered by the trend comparison form.
    pub fn trend_makes(&self) -> &'static [&'static str] {
        TREND_MAKES
    }
}
