use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use car_market_sdk::display::estimate_summary;
use car_market_sdk::EstimationInput;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/estimate  `{"make": "toyota", "model": "Land Cruiser", "year": "2020"}`
///
/// Placeholder estimate. Responds 400 when any field is empty.
pub async fn estimate_price(
    State(state): State<Arc<AppState>>,
    Json(input): Json<EstimationInput>,
) -> Result<Json<Value>, AppError> {
    let result = state.market.estimate(&input)?;
    let summary = estimate_summary(&result);

    Ok(Json(json!({
        "data": result,
        "summary": summary,
    })))
}
