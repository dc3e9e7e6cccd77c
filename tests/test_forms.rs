//! Listing search form and brand table tests.

mod common;

use car_market_sdk::queries::BrandQuery;
use car_market_sdk::ListingSearchForm;

#[test]
fn brands_are_sorted() {
    let brands = BrandQuery::new().brands();
    assert_eq!(brands.len(), 19);
    assert_eq!(brands.first(), Some(&"Audi"));
    assert_eq!(brands.last(), Some(&"Volkswagen"));
    let mut sorted = brands.clone();
    sorted.sort();
    assert_eq!(brands, sorted);
}

#[test]
fn models_for_known_and_unknown_brands() {
    let bq = BrandQuery::new();
    assert_eq!(bq.models("Jetour"), &["T2", "X70", "X90", "Dashing"]);
    assert!(bq.models("Ferrari").is_empty());
    assert!(bq.models("toyota").is_empty());
    assert!(bq.contains("Land Rover"));
}

#[test]
fn form_make_options() {
    let bq = BrandQuery::new();
    assert_eq!(bq.estimator_makes().len(), 6);
    assert!(bq.estimator_makes().contains(&("mercedes", "Mercedes-Benz")));
    assert_eq!(bq.trend_makes(), &["Nissan", "Toyota", "Lexus", "BMW", "Mercedes"]);
}

#[test]
fn selecting_brand_resets_model_and_reloads_models() {
    let mut form = ListingSearchForm::new();
    assert!(!form.model_enabled());

    form.select_brand("Toyota");
    assert!(form.model_enabled());
    assert_eq!(form.available_models().len(), 8);
    form.select_model("Land Cruiser");
    assert_eq!(form.query().model.as_deref(), Some("Land Cruiser"));

    form.select_brand("Nissan");
    assert_eq!(form.query().model, None);
    assert!(form.available_models().iter().any(|m| m == "Patrol"));
}

#[test]
fn selecting_unknown_brand_empties_model_list() {
    let mut form = ListingSearchForm::new();
    form.select_brand("Lexus");
    form.select_brand("Bugatti");
    assert!(form.available_models().is_empty());
    assert_eq!(form.query().brand.as_deref(), Some("Bugatti"));
}

#[test]
fn submit_filters_and_replaces_results() {
    let catalog = common::sample_catalog();
    let mut form = ListingSearchForm::new();

    form.select_brand("Toyota");
    form.select_model("Land Cruiser");
    assert_eq!(form.submit(&catalog).len(), 2);

    form.set_year_from("2020");
    form.set_year_to("2025");
    let found = form.submit(&catalog);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].model, "Land Cruiser Prado");
    assert_eq!(form.results().len(), 1);
}
