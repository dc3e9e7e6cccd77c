//! End-to-end checks through the `CarMarket` entry point.

mod common;

use car_market_sdk::{
    BaseDraw, CarMarket, EstimationInput, SearchQuery, TrendCandidate,
};

#[test]
fn default_market_uses_sample_catalog() {
    let market = CarMarket::builder().build().unwrap();
    assert_eq!(market.catalog().len(), 2);

    let found = market.listings().search(&SearchQuery::default().brand("TOYOTA"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].model, "Land Cruiser");
}

#[test]
fn builder_loads_listings_path() {
    let file = common::write_catalog_file(&common::sample_listings());
    let market = CarMarket::builder().listings_path(file.path()).build().unwrap();
    assert_eq!(market.catalog().len(), 7);
}

#[test]
fn explicit_catalog_wins_over_path() {
    let market = CarMarket::builder()
        .listings_path("/definitely/not/here.json")
        .catalog(common::sample_catalog())
        .build()
        .unwrap();
    assert_eq!(market.listings().all().len(), 7);
}

#[test]
fn bad_listings_path_fails_build() {
    assert!(CarMarket::builder()
        .listings_path("/definitely/not/here.json")
        .build()
        .is_err());
}

#[test]
fn estimate_through_market() {
    let market = CarMarket::builder().build().unwrap();
    let r = market
        .estimate(&EstimationInput::new("toyota", "Land Cruiser", "2020"))
        .unwrap();
    assert!((30_000..=79_999).contains(&r.price));
    assert_eq!(r.low_bound, r.price as f64 * 0.9);
    assert_eq!(r.high_bound, r.price as f64 * 1.1);

    assert!(market.estimate(&EstimationInput::default()).is_err());
}

#[test]
fn seeded_markets_reproduce_each_other() {
    let input = EstimationInput::new("lexus", "LX", "2022");
    let a = CarMarket::builder().seed(5).build().unwrap();
    let b = CarMarket::builder().seed(5).build().unwrap();

    let first: Vec<i64> = (0..4).map(|_| a.estimate(&input).unwrap().price).collect();
    let second: Vec<i64> = (0..4).map(|_| b.estimate(&input).unwrap().price).collect();
    assert_eq!(first, second);
}

#[test]
fn market_trend_session_round_trip() {
    let market = CarMarket::builder()
        .seed(3)
        .base_draw(BaseDraw::PerSeries)
        .build()
        .unwrap();

    let mut trends = market.trends();
    trends.set_candidate(TrendCandidate::new("Toyota", "Camry").years("2019", "2021"));
    trends.add().unwrap();
    let chart = trends.chart().unwrap();
    assert_eq!(chart.points.len(), 3);
    assert_eq!(chart.series[0].key, "Toyota Camry");

    let values: Vec<i64> = chart
        .points
        .iter()
        .map(|p| p.get("Toyota Camry").unwrap())
        .collect();
    assert!(values.iter().all(|v| (35_000..=78_998).contains(v)));
}

#[test]
fn trend_chart_for_explicit_selections() {
    let market = CarMarket::builder().build().unwrap();
    let chart = market
        .trend_chart(&[common::selection(4, "Nissan", "Patrol", 2013, 2024)])
        .unwrap();
    assert_eq!(chart.points.len(), 12);
    assert_eq!(chart.series[0].id, 4);

    let err = market
        .trend_chart(&[common::selection(5, "Nissan", "Patrol", -50_000, 50_000)])
        .unwrap_err();
    assert!(err.to_string().contains("spans"));
}

#[test]
fn display_summarizes_market() {
    let market = CarMarket::builder().seed(9).build().unwrap();
    assert_eq!(
        market.to_string(),
        "CarMarket(listings=2, seed=9, base_draw=PerPoint)"
    );
}
