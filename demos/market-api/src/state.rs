/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The car market SDK. Read-only after startup; each request draws from
    /// its own number source.
    pub market: car_market_sdk::CarMarket,
}
