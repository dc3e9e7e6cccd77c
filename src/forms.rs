//! Listing search form state.

use crate::catalog::ListingCatalog;
use crate::models::{Listing, SearchQuery};
use crate::queries::{filter_listings, BrandQuery};

/// Values of the listing search form plus the models its brand allows.
#[derive(Debug, Clone, Default)]
pub struct ListingSearchForm {
    query: SearchQuery,
    available_models: Vec<String>,
    results: Vec<Listing>,
}

impl ListingSearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Pick a brand. Clears the model and reloads the allowed models; an
    /// unknown brand allows none.
    pub fn select_brand(&mut self, brand: &str) {
        self.query.brand = Some(brand.to_string());
        self.query.model = None;
        self.available_models = BrandQuery::new()
            .models(brand)
            .iter()
            .map(|m| m.to_string())
            .collect();
    }

    pub fn select_model(&mut self, model: &str) {
        self.query.model = Some(model.to_string());
    }

    pub fn set_year_from(&mut self, year: &str) {
        self.query.year_from = Some(year.to_string());
    }

    pub fn set_year_to(&mut self, year: &str) {
        self.query.year_to = Some(year.to_string());
    }

    pub fn available_models(&self) -> &[String] {
        &self.available_models
    }

    /// The model picker is disabled until a brand is chosen.
    pub fn model_enabled(&self) -> bool {
        self.query.brand.as_deref().is_some_and(|b| !b.is_empty())
    }

    /// Run the search, replacing the previous results.
    pub fn submit(&mut self, catalog: &ListingCatalog) -> &[Listing] {
        self.results = filter_listings(catalog.listings(), &self.query);
        &self.results
    }

    pub fn results(&self) -> &[Listing] {
        &self.results
    }
}
