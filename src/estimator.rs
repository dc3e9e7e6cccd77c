//! Placeholder price estimation.
//!
//! The estimate is produced by a [`PriceModel`]. The only model shipped is
//! [`RandomPriceModel`], which draws a uniform price and ignores the input;
//! a trained model can implement the same trait without touching callers.

use crate::config::{
    ESTIMATE_HIGH_FACTOR, ESTIMATE_LOW_FACTOR, ESTIMATE_PRICE_MIN, ESTIMATE_PRICE_SPAN,
};
use crate::error::{CarMarketError, Result};
use crate::models::{EstimationInput, EstimationResult};
use crate::random::NumberSource;

/// Maps a validated estimation input to a price.
pub trait PriceModel {
    fn predict(&mut self, input: &EstimationInput) -> i64;
}

/// Uniform price in `[30000, 79999]` drawn from a [`NumberSource`].
pub struct RandomPriceModel<S> {
    source: S,
}

impl<S: NumberSource> RandomPriceModel<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: NumberSource> PriceModel for RandomPriceModel<S> {
    fn predict(&mut self, _input: &EstimationInput) -> i64 {
        self.source.next_in(ESTIMATE_PRICE_MIN, ESTIMATE_PRICE_SPAN)
    }
}

impl<F> PriceModel for F
where
    F: FnMut(&EstimationInput) -> i64,
{
    fn predict(&mut self, input: &EstimationInput) -> i64 {
        self(input)
    }
}

/// Check that make, model and year are all filled in.
///
/// Reports the first empty field in form order.
pub fn validate(input: &EstimationInput) -> Result<()> {
    let fields = [
        ("make", &input.make),
        ("model", &input.model),
        ("year", &input.year),
    ];
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => Err(CarMarketError::MissingField(*name)),
        None => Ok(()),
    }
}

/// Validate `input` and price it with `model`.
pub fn estimate<M: PriceModel + ?Sized>(
    model: &mut M,
    input: &EstimationInput,
) -> Result<EstimationResult> {
    validate(input)?;

    let price = model.predict(input);
    let result = band(price);
    tracing::debug!(
        make = %input.make,
        model = %input.model,
        year = %input.year,
        price,
        "estimated price"
    );
    Ok(result)
}

/// Wrap a price with its ±10% band. The bounds are not rounded.
pub fn band(price: i64) -> EstimationResult {
    EstimationResult {
        price,
        low_bound: price as f64 * ESTIMATE_LOW_FACTOR,
        high_bound: price as f64 * ESTIMATE_HIGH_FACTOR,
    }
}

// ---------------------------------------------------------------------------
// Estimator: the form's state across submissions
// ---------------------------------------------------------------------------

/// Holds the estimate form's price model and its latest result.
///
/// A failed submission leaves the previous result in place.
pub struct Estimator<M> {
    model: M,
    last: Option<EstimationResult>,
}

impl<M: PriceModel> Estimator<M> {
    pub fn new(model: M) -> Self {
        Self { model, last: None }
    }

    pub fn submit(&mut self, input: &EstimationInput) -> Result<EstimationResult> {
        let result = estimate(&mut self.model, input)?;
        self.last = Some(result);
        Ok(result)
    }

    pub fn last_result(&self) -> Option<&EstimationResult> {
        self.last.as_ref()
    }
}
