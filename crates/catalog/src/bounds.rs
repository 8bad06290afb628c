//! Dataset-wide derived bounds: category list and integer price extremes.

use serde::{Deserialize, Serialize};

use storefront_core::{CatalogError, CatalogResult, ValueObject};

use crate::product::ProductRecord;

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// Bounds derived once per dataset, immutable thereafter.
///
/// `categories` holds the sentinel first, then each distinct category in
/// first-occurrence order. Price extremes are widened to conservative
/// integers (floor of the dataset minimum, ceiling of the maximum) so they
/// can seed the price text inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedBounds {
    categories: Vec<String>,
    min_price: u64,
    max_price: u64,
}

impl ValueObject for DerivedBounds {}

impl DerivedBounds {
    /// Derive bounds from a non-empty record collection in a single pass.
    ///
    /// An empty collection is fatal: there are no extremes to seed the
    /// session with.
    pub fn from_records(records: &[ProductRecord]) -> CatalogResult<Self> {
        if records.is_empty() {
            return Err(CatalogError::invalid_input(
                "cannot derive bounds from empty catalog",
            ));
        }

        let mut categories = vec![ALL_CATEGORIES.to_string()];
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for record in records {
            // Category sets are tiny; a linear dedup scan keeps first-seen order.
            if !categories.iter().any(|c| c == &record.category) {
                categories.push(record.category.clone());
            }
            min = min.min(record.price);
            max = max.max(record.price);
        }

        Ok(Self {
            categories,
            min_price: min.floor() as u64,
            max_price: max.ceil() as u64,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn min_price(&self) -> u64 {
        self.min_price
    }

    pub fn max_price(&self) -> u64 {
        self.max_price
    }
}
