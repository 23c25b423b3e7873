//! Search filter criteria and matching.

use crate::catalog::{CategoryFilter, Product};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Upper end of the price slider, in roubles.
pub const PRICE_SLIDER_MAX: u64 = 10_000;
/// Price slider granularity.
pub const PRICE_SLIDER_STEP: u64 = 100;
/// Upper end of the rating slider.
pub const RATING_SLIDER_MAX: f64 = 5.0;
/// Rating slider granularity.
pub const RATING_SLIDER_STEP: f64 = 0.5;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a range from rouble amounts. `min > max` is allowed and
    /// matches nothing.
    pub fn new(min: u64, max: u64) -> Self {
        Self {
            min: Money::new(min),
            max: Money::new(max),
        }
    }

    /// Check whether a price lies within the bounds.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, PRICE_SLIDER_MAX)
    }
}

/// Combined search, category, price and rating constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name or seller.
    pub search: String,
    /// Category selection.
    pub category: CategoryFilter,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
    /// Inclusive lower bound on rating.
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            price_range: PriceRange::default(),
            min_rating: 0.0,
        }
    }
}

impl FilterCriteria {
    /// Criteria that match the whole built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Set the minimum rating.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// True when nothing narrows the default listing.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether a single product satisfies every constraint.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.category.admits(product.category)
            && self.price_range.contains(product.price)
            && product.rating >= self.min_rating
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.seller.to_lowercase().contains(&needle)
    }
}

/// Products satisfying `criteria`, keeping their original order.
pub fn apply_filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let matched: Vec<Product> = products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    tracing::debug!(
        search = %criteria.search,
        category = %criteria.category,
        min_price = criteria.price_range.min.amount(),
        max_price = criteria.price_range.max.amount(),
        min_rating = criteria.min_rating,
        matched = matched.len(),
        total = products.len(),
        "catalog filtered"
    );

    matched
}
