use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use car_market_sdk::year::{listing_years, trend_years};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/brands
///
/// Brands offered by the listing search, sorted alphabetically.
pub async fn list_brands(State(state): State<Arc<AppState>>) -> Json<Value> {
    let brands = state.market.brands().brands();
    let count = brands.len();
    Json(json!({ "data": brands, "count": count }))
}

/// GET /api/brands/{brand}/models
///
/// Models for a brand. An unknown brand has no models rather than a 404,
/// matching how the search form treats it.
pub async fn list_models(
    State(state): State<Arc<AppState>>,
    Path(brand): Path<String>,
) -> Json<Value> {
    let models = state.market.brands().models(&brand);
    Json(json!({ "data": models, "count": models.len() }))
}

/// GET /api/options
///
/// Picker contents for all three forms.
pub async fn options(State(state): State<Arc<AppState>>) -> Json<Value> {
    let brands = state.market.brands();
    let estimator_makes: Vec<Value> = brands
        .estimator_makes()
        .iter()
        .map(|(value, label)| json!({ "value": value, "label": label }))
        .collect();

    Json(json!({
        "data": {
            "listingYears": listing_years(),
            "trendYears": trend_years(),
            "estimatorMakes": estimator_makes,
            "trendMakes": brands.trend_makes(),
        }
    }))
}
