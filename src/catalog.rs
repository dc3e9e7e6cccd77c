//! In-memory listing catalog.
//!
//! The catalog is read-only reference data. It starts from the bundled sample
//! listings, or from a JSON array of listing records supplied by the caller.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::models::Listing;

/// Immutable collection of listings the search form filters over.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// The bundled marketplace samples.
    pub fn sample() -> Self {
        Self::new(sample_listings())
    }

    /// Load a catalog from a JSON array of listing records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Ok(Self::new(listings))
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to open listing catalog");
            e
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            listings = catalog.len(),
            "loaded listing catalog"
        );
        Ok(catalog)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            source: "mzad".to_string(),
            title: "jetour t2".to_string(),
            price: 126_000,
            year: 2025,
            mileage_km: 0,
            description: "130000QR 0Km".to_string(),
            brand: "Jetour".to_string(),
            model: "T2".to_string(),
            fuel_type: "Gasoline".to_string(),
            transmission: "Automatic".to_string(),
            city: "Doha".to_string(),
            url: "https://mzadqatar.com/en/products/jetour-t2-93770596".to_string(),
        },
        Listing {
            source: "mzad".to_string(),
            title: "Land Cruiser 2019 GXR".to_string(),
            price: 115_000,
            year: 2019,
            mileage_km: 460_000,
            description: "The car is in perfect condition 460000 km. Only the front bumper \
                          and the back bumper are replaced. Price negotiable."
                .to_string(),
            brand: "Toyota".to_string(),
            model: "Land Cruiser".to_string(),
            fuel_type: "Gasoline".to_string(),
            transmission: "Automatic".to_string(),
            city: "Al Shamal".to_string(),
            url: "https://mzadqatar.com/en/products/land-cruiser-2019-gxr-93782530".to_string(),
        },
    ]
}
