use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use car_market_sdk::display::ListingCard;
use car_market_sdk::queries::results_heading;
use car_market_sdk::SearchQuery;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchListingsParams {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year_from: Option<String>,
    pub year_to: Option<String>,
}

/// GET /api/listings?brand=Toyota&model=Land+Cruiser&year_from=2015&year_to=2020
///
/// Search the listing catalog. Every parameter is optional.
pub async fn search_listings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchListingsParams>,
) -> Json<Value> {
    let query = SearchQuery {
        brand: params.brand,
        model: params.model,
        year_from: params.year_from,
        year_to: params.year_to,
    };

    let listings = state.market.listings().search(&query);
    let count = listings.len();
    let cards: Vec<ListingCard> = listings.iter().map(ListingCard::from).collect();
    Json(json!({
        "data": listings,
        "cards": cards,
        "count": count,
        "heading": results_heading(count),
    }))
}
