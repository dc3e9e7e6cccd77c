//! Listing search over the in-memory catalog.

use crate::catalog::ListingCatalog;
use crate::models::{Listing, SearchQuery};
use crate::year::parse_bound;

// ---------------------------------------------------------------------------
// ListingQuery
// ---------------------------------------------------------------------------

/// Query interface for marketplace listings backed by a [`ListingCatalog`].
pub struct ListingQuery<'a> {
    catalog: &'a ListingCatalog,
}

impl<'a> ListingQuery<'a> {
    /// Create a new `ListingQuery` bound to the given catalog.
    pub fn new(catalog: &'a ListingCatalog) -> Self {
        Self { catalog }
    }

    /// Every listing in catalog order.
    pub fn all(&self) -> Vec<Listing> {
        self.catalog.listings().to_vec()
    }

    /// Listings matching every provided criterion, in catalog order.
    pub fn search(&self, query: &SearchQuery) -> Vec<Listing> {
        filter_listings(self.catalog.listings(), query)
    }

    /// Number of listings `search` would return.
    pub fn count(&self, query: &SearchQuery) -> usize {
        let filter = ListingFilter::from_query(query);
        self.catalog
            .listings()
            .iter()
            .filter(|l| filter.matches(l))
            .count()
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the stable subsequence of `listings` matching `query`.
///
/// Brand and model match by case-insensitive substring; an empty or missing
/// value matches everything. Year bounds are inclusive, and a bound that does
/// not parse imposes no constraint. An inverted year range matches nothing.
pub fn filter_listings(listings: &[Listing], query: &SearchQuery) -> Vec<Listing> {
    let filter = ListingFilter::from_query(query);
    let matched: Vec<Listing> = listings
        .iter()
        .filter(|l| filter.matches(l))
        .cloned()
        .collect();

    tracing::debug!(
        brand = ?query.brand,
        model = ?query.model,
        year_from = ?filter.year_from,
        year_to = ?filter.year_to,
        matched = matched.len(),
        total = listings.len(),
        "filtered listings"
    );
    matched
}

/// "1 Listing Found" / "N Listings Found".
pub fn results_heading(count: usize) -> String {
    let noun = if count == 1 { "Listing" } else { "Listings" };
    format!("{count} {noun} Found")
}

/// A [`SearchQuery`] with its text normalized once up front.
struct ListingFilter {
    brand: Option<String>,
    model: Option<String>,
    year_from: Option<i32>,
    year_to: Option<i32>,
}

impl ListingFilter {
    fn from_query(query: &SearchQuery) -> Self {
        Self {
            brand: lowered(query.brand.as_deref()),
            model: lowered(query.model.as_deref()),
            year_from: parse_bound(query.year_from.as_deref()),
            year_to: parse_bound(query.year_to.as_deref()),
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        contains_ci(&listing.brand, self.brand.as_deref())
            && contains_ci(&listing.model, self.model.as_deref())
            && self.year_from.map_or(true, |y| listing.year >= y)
            && self.year_to.map_or(true, |y| listing.year <= y)
    }
}

fn lowered(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_lowercase)
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) => haystack.to_lowercase().contains(n),
        None => true,
    }
}
