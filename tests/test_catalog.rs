//! Listing catalog loading tests.

mod common;

use std::io::Cursor;

use car_market_sdk::{CarMarketError, ListingCatalog};

#[test]
fn sample_catalog_has_bundled_listings() {
    let catalog = ListingCatalog::sample();
    assert_eq!(catalog.len(), 2);
    let brands: Vec<&str> = catalog.listings().iter().map(|l| l.brand.as_str()).collect();
    assert_eq!(brands, vec!["Jetour", "Toyota"]);
    assert_eq!(ListingCatalog::default(), catalog);
}

#[test]
fn loads_json_file() {
    let listings = common::sample_listings();
    let file = common::write_catalog_file(&listings);

    let catalog = ListingCatalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.listings(), listings.as_slice());
}

#[test]
fn reads_original_record_field_names() {
    let json = r#"[{
        "source": "mzad",
        "listing_title": "jetour t2",
        "price": 126000,
        "year": 2025,
        "mileage_km": 0,
        "description": "130000QR 0Km",
        "brand": "Jetour",
        "model": "T2",
        "fuel_type": "Gasoline",
        "transmission": "Automatic",
        "city": "Doha",
        "url": "https://mzadqatar.com/en/products/jetour-t2-93770596"
    }]"#;

    let catalog = ListingCatalog::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.listings()[0].title, "jetour t2");
    assert_eq!(catalog.listings()[0], ListingCatalog::sample().listings()[0]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ListingCatalog::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CarMarketError::Io(_)));
}

#[test]
fn malformed_json_is_json_error() {
    let err = ListingCatalog::from_reader(Cursor::new("[{\"brand\": 1}]")).unwrap_err();
    assert!(matches!(err, CarMarketError::Json(_)));
}

#[test]
fn empty_array_is_an_empty_catalog() {
    let catalog = ListingCatalog::from_reader(Cursor::new("[]")).unwrap();
    assert!(catalog.is_empty());
}
