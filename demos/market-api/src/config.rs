use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub listings_path: Option<PathBuf>,
    pub rng_seed: Option<u64>,
    pub per_series_base: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            listings_path: env::var("LISTINGS_PATH").ok().map(PathBuf::from),
            rng_seed: env::var("RNG_SEED")
                .ok()
                .map(|s| s.parse())
                .transpose()
                .context("RNG_SEED must be an unsigned integer")?,
            per_series_base: env::var("TREND_BASE_PER_SERIES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
