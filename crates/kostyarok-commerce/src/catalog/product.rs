//! Product records.

use crate::catalog::CategoryId;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Seller (workshop) name.
    pub seller: String,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Category the product is listed under.
    pub category: CategoryId,
    /// Display glyph.
    pub image: String,
}

impl Product {
    /// Create a product record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        seller: impl Into<String>,
        category: CategoryId,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: Money::new(price),
            seller: seller.into(),
            rating: 0.0,
            reviews: 0,
            category,
            image: String::new(),
        }
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating.clamp(0.0, MAX_RATING);
        self.reviews = reviews;
        self
    }

    /// Set the display glyph.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Number of filled stars in a five-star display.
    pub fn full_stars(&self) -> usize {
        full_stars(self.rating)
    }
}

/// Number of filled stars for a rating (floor, capped at five).
pub fn full_stars(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.clamp(0.0, MAX_RATING).floor() as usize
}
