mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use car_market_sdk::{BaseDraw, CarMarket};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let mut builder = CarMarket::builder();
    if let Some(path) = &config.listings_path {
        builder = builder.listings_path(path);
    }
    if let Some(seed) = config.rng_seed {
        builder = builder.seed(seed);
    }
    if config.per_series_base {
        builder = builder.base_draw(BaseDraw::PerSeries);
    }
    let market = builder.build().context("failed to initialize car market")?;
    tracing::info!(%market, "car market ready");

    let state = Arc::new(AppState { market });

    let app = Router::new()
        .route("/api/options", get(routes::brands::options))
        .route("/api/brands", get(routes::brands::list_brands))
        .route("/api/brands/{brand}/models", get(routes::brands::list_models))
        .route("/api/listings", get(routes::listings::search_listings))
        .route("/api/estimate", post(routes::estimate::estimate_price))
        .route("/api/trends", post(routes::trends::build_trends))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
