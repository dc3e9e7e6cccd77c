use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use car_market_sdk::trends::{add_selection, remove_selection, SelectionIds};
use car_market_sdk::{TrendCandidate, TrendSelection};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TrendRequest {
    /// Selections the client already holds.
    #[serde(default)]
    pub selections: Vec<TrendSelection>,
    /// Optional candidate to append before generating.
    pub add: Option<TrendCandidate>,
    /// Optional selection id to drop before generating.
    pub remove: Option<u64>,
}

/// POST /api/trends
///
/// The client owns the selection list; this applies an optional add and
/// remove, then returns the updated list with a freshly drawn chart. A year
/// range too wide to chart is a 400.
pub async fn build_trends(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TrendRequest>,
) -> Result<Json<Value>, AppError> {
    let mut selections = req.selections;

    if let Some(id) = req.remove {
        remove_selection(&mut selections, id);
    }
    let added = req.add.as_ref().and_then(|candidate| {
        let mut ids = SelectionIds::after(&selections);
        add_selection(&mut selections, &mut ids, candidate)
    });

    let chart = state.market.trend_chart(&selections)?;
    Ok(Json(json!({
        "data": chart,
        "selections": selections,
        "added": added,
    })))
}
