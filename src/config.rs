//! Static reference data and numeric constants shared by the workflows.

/// Lower bound of the placeholder estimate, inclusive.
pub const ESTIMATE_PRICE_MIN: i64 = 30_000;
/// Width of the placeholder estimate range (`[min, min + span)`).
pub const ESTIMATE_PRICE_SPAN: i64 = 50_000;
pub const ESTIMATE_LOW_FACTOR: f64 = 0.9;
pub const ESTIMATE_HIGH_FACTOR: f64 = 1.1;

pub const TREND_BASE_MIN: i64 = 40_000;
pub const TREND_BASE_SPAN: i64 = 30_000;
pub const TREND_VARIATION_MIN: i64 = -5_000;
pub const TREND_VARIATION_SPAN: i64 = 10_000;
/// Linear drift added per year since the selection's start year.
pub const TREND_YEARLY_DRIFT: i64 = 2_000;

/// Widest year range a single chart may cover, counting both ends.
pub const TREND_MAX_YEAR_SPAN: i64 = 200;

pub const TREND_DEFAULT_START_YEAR: i32 = 2013;
pub const TREND_DEFAULT_END_YEAR: i32 = 2024;

/// Number of colour slots the chart cycles through.
pub const CHART_PALETTE_SIZE: usize = 5;

pub const LISTING_NEWEST_YEAR: i32 = 2025;
pub const LISTING_YEAR_OPTIONS: usize = 25;

pub const CURRENCY: &str = "QAR";

/// Brand to model lookup used by the listing search form.
pub const BRAND_MODELS: &[(&str, &[&str])] = &[
    (
        "Toyota",
        &["Land Cruiser", "Prado", "Camry", "Corolla", "Hilux", "RAV4", "Yaris", "Fortuner"],
    ),
    (
        "Nissan",
        &["Patrol", "Pathfinder", "Altima", "Maxima", "X-Trail", "Kicks", "Sunny"],
    ),
    ("Lexus", &["LX", "GX", "RX", "ES", "LS", "NX", "UX"]),
    (
        "BMW",
        &["X5", "X6", "X7", "3 Series", "5 Series", "7 Series", "X3", "X1"],
    ),
    (
        "Mercedes-Benz",
        &["G-Class", "GLE", "GLC", "E-Class", "S-Class", "C-Class", "A-Class"],
    ),
    ("Audi", &["Q7", "Q8", "Q5", "A6", "A4", "A3", "Q3"]),
    ("Honda", &["Accord", "Civic", "CR-V", "Pilot", "City"]),
    ("Hyundai", &["Tucson", "Santa Fe", "Elantra", "Sonata", "Creta"]),
    ("Kia", &["Sportage", "Sorento", "Seltos", "Cerato", "Carnival"]),
    ("Ford", &["Explorer", "Expedition", "F-150", "Edge", "Mustang"]),
    ("Chevrolet", &["Tahoe", "Suburban", "Traverse", "Silverado"]),
    ("GMC", &["Yukon", "Sierra", "Terrain", "Acadia"]),
    ("Jeep", &["Wrangler", "Grand Cherokee", "Cherokee", "Compass"]),
    (
        "Land Rover",
        &["Range Rover", "Range Rover Sport", "Discovery", "Defender"],
    ),
    ("Porsche", &["Cayenne", "Macan", "Panamera", "911"]),
    ("Mitsubishi", &["Pajero", "Outlander", "Lancer", "Attrage"]),
    ("Mazda", &["CX-5", "CX-9", "CX-3", "3", "6"]),
    ("Volkswagen", &["Tiguan", "Touareg", "Passat", "Golf"]),
    ("Jetour", &["T2", "X70", "X90", "Dashing"]),
];

/// `(value, label)` pairs offered by the estimate form's make picker.
pub const ESTIMATOR_MAKES: &[(&str, &str)] = &[
    ("nissan", "Nissan"),
    ("toyota", "Toyota"),
    ("lexus", "Lexus"),
    ("bmw", "BMW"),
    ("mercedes", "Mercedes-Benz"),
    ("audi", "Audi"),
];

pub const TREND_MAKES: &[&str] = &["Nissan", "Toyota", "Lexus", "BMW", "Mercedes"];
