//! Query modules for the car market SDK.
//!
//! Each module provides a query struct that borrows from the
//! [`ListingCatalog`](crate::catalog::ListingCatalog) or the static reference
//! tables in [`config`](crate::config), and returns plain data.

pub mod brands;
pub mod listings;

pub use brands::BrandQuery;
pub use listings::{filter_listings, results_heading, ListingQuery};
