//! Shared test fixtures for the car market SDK integration tests.
//!
//! Provides a small listing catalog covering several brands and years, a
//! helper to write it to a temp file, and selection builders.

#![allow(dead_code)]

use car_market_sdk::{Listing, ListingCatalog, TrendSelection};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn listing(brand: &str, model: &str, year: i32, price: i64) -> Listing {
    Listing {
        source: "mzad".to_string(),
        title: format!("{brand} {model} {year}"),
        price,
        year,
        mileage_km: 50_000,
        description: "Fixture listing".to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        fuel_type: "Gasoline".to_string(),
        transmission: "Automatic".to_string(),
        city: "Doha".to_string(),
        url: format!("https://example.test/{}-{}", brand.to_lowercase(), year),
    }
}

/// Seven listings across four brands, deliberately not sorted by year.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("Toyota", "Land Cruiser", 2019, 115_000),
        listing("Nissan", "Patrol", 2021, 180_000),
        listing("Toyota", "Camry", 2015, 38_000),
        listing("Lexus", "LX", 2023, 410_000),
        listing("Jetour", "T2", 2025, 126_000),
        listing("Toyota", "Land Cruiser Prado", 2022, 160_000),
        listing("Nissan", "Sunny", 2013, 14_000),
    ]
}

pub fn sample_catalog() -> ListingCatalog {
    ListingCatalog::new(sample_listings())
}

/// Write `listings` as a JSON array to a temp file.
///
/// The caller must keep the returned file alive while it is read.
pub fn write_catalog_file(listings: &[Listing]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, listings).unwrap();
    file.flush().unwrap();
    file
}

pub fn selection(id: u64, make: &str, model: &str, start: i32, end: i32) -> TrendSelection {
    TrendSelection {
        id,
        make: make.to_string(),
        model: model.to_string(),
        year_start: start,
        year_end: end,
    }
}
