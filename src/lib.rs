//! Car market SDK for Rust.
//!
//! Decision logic behind the car market demo page: listing search over an
//! in-memory catalog, a placeholder price estimator, and synthetic price
//! series for the trend comparison chart. All prices produced here are
//! random placeholders; no real valuation model is involved.
//!
//! # Quick start
//!
//! ```no_run
//! use car_market_sdk::{CarMarket, EstimationInput, SearchQuery, TrendCandidate};
//!
//! let market = CarMarket::builder().build().unwrap();
//!
//! // Search listings
//! let toyotas = market.listings().search(&SearchQuery::default().brand("toyota"));
//!
//! // Estimate a price
//! let estimate = market
//!     .estimate(&EstimationInput::new("toyota", "Land Cruiser", "2020"))
//!     .unwrap();
//!
//! // Compare trends
//! let mut trends = market.trends();
//! trends.set_candidate(TrendCandidate::new("Nissan", "Patrol").years("2018", "2022"));
//! trends.add();
//! let chart = trends.chart().unwrap();
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod estimator;
pub mod forms;
pub mod models;
pub mod queries;
pub mod random;
pub mod trends;
pub mod year;

pub use catalog::ListingCatalog;
pub use error::{CarMarketError, Result};
pub use estimator::{Estimator, PriceModel, RandomPriceModel};
pub use forms::ListingSearchForm;
pub use models::*;
pub use random::{NumberSource, SeededSource, SequenceSource, ThreadSource};
pub use trends::{BaseDraw, SeriesGenerator, TrendComparison};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Number source handed out by [`CarMarket`].
pub type DynSource = Box<dyn NumberSource>;

// ---------------------------------------------------------------------------
// CarMarketBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CarMarket`] instance.
///
/// Use [`CarMarket::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CarMarketBuilder::build).
#[derive(Default)]
pub struct CarMarketBuilder {
    listings_path: Option<PathBuf>,
    catalog: Option<ListingCatalog>,
    seed: Option<u64>,
    base_draw: BaseDraw,
}

impl CarMarketBuilder {
    /// Load listings from a JSON array file instead of the bundled samples.
    pub fn listings_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.listings_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an already constructed catalog. Takes precedence over
    /// [`listings_path`](Self::listings_path).
    pub fn catalog(mut self, catalog: ListingCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Seed every number source so runs are reproducible.
    ///
    /// Each source handed out gets its own seed derived from this one, so
    /// consecutive estimates still differ. Unseeded markets use the
    /// thread-local RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// How trend series draw their base price. Defaults to
    /// [`BaseDraw::PerPoint`].
    pub fn base_draw(mut self, base_draw: BaseDraw) -> Self {
        self.base_draw = base_draw;
        self
    }

    /// Build the market, loading the listing catalog if a path was given.
    pub fn build(self) -> Result<CarMarket> {
        let catalog = match (self.catalog, self.listings_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => ListingCatalog::from_json_file(path)?,
            (None, None) => ListingCatalog::sample(),
        };
        tracing::debug!(
            listings = catalog.len(),
            seeded = self.seed.is_some(),
            base_draw = ?self.base_draw,
            "car market ready"
        );
        Ok(CarMarket {
            catalog,
            seed: self.seed,
            draws: AtomicU64::new(0),
            base_draw: self.base_draw,
        })
    }
}

// ---------------------------------------------------------------------------
// CarMarket
// ---------------------------------------------------------------------------

/// The main entry point for the car market SDK.
///
/// Owns the listing catalog and the randomness configuration, and exposes the
/// three workflows. Query accessors borrow; workflow accessors return owned
/// state objects, one per form session.
pub struct CarMarket {
    catalog: ListingCatalog,
    seed: Option<u64>,
    draws: AtomicU64,
    base_draw: BaseDraw,
}

impl CarMarket {
    /// Create a new builder for configuring the market.
    pub fn builder() -> CarMarketBuilder {
        CarMarketBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the listing query interface.
    pub fn listings(&self) -> queries::ListingQuery<'_> {
        queries::ListingQuery::new(&self.catalog)
    }

    /// Access the brand and make tables.
    pub fn brands(&self) -> queries::BrandQuery {
        queries::BrandQuery::new()
    }

    /// The listing catalog the market was built with.
    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    // -- Workflows ---------------------------------------------------------

    /// A fresh number source, seeded if the market was built with a seed.
    pub fn source(&self) -> DynSource {
        match self.seed {
            Some(seed) => {
                let n = self.draws.fetch_add(1, Ordering::Relaxed);
                Box::new(SeededSource::new(seed.wrapping_add(n)))
            }
            None => Box::new(ThreadSource::new()),
        }
    }

    /// A new estimate form session.
    pub fn estimator(&self) -> Estimator<RandomPriceModel<DynSource>> {
        Estimator::new(RandomPriceModel::new(self.source()))
    }

    /// Validate `input` and return a one-off placeholder estimate.
    pub fn estimate(&self, input: &EstimationInput) -> Result<EstimationResult> {
        let mut model = RandomPriceModel::new(self.source());
        estimator::estimate(&mut model, input)
    }

    /// A series generator using the configured base-draw mode.
    pub fn series_generator(&self) -> SeriesGenerator<DynSource> {
        SeriesGenerator::new(self.source()).base_draw(self.base_draw)
    }

    /// A new trend comparison session.
    pub fn trends(&self) -> TrendComparison<DynSource> {
        TrendComparison::new(self.series_generator())
    }

    /// Build a chart for `selections` in one call.
    ///
    /// Fails with [`CarMarketError::InvalidArgument`] when the selections
    /// span more than [`config::TREND_MAX_YEAR_SPAN`] years.
    pub fn trend_chart(&self, selections: &[TrendSelection]) -> Result<TrendChart> {
        self.series_generator().build_chart(selections)
    }

    /// A new listing search form session.
    pub fn search_form(&self) -> ListingSearchForm {
        ListingSearchForm::new()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CarMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CarMarket(listings={}, seed={}, base_draw={:?})",
            self.catalog.len(),
            self.seed
                .map_or_else(|| "none".to_string(), |s| s.to_string()),
            self.base_draw
        )
    }
}
