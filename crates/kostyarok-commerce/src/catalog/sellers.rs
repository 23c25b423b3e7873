//! Seller directory aggregates.

use crate::catalog::{Catalog, Product};
use serde::{Deserialize, Serialize};

/// Sellers featured on the sellers page, in display order.
pub const FEATURED_SELLERS: [&str; 6] = [
    "Мастер Григорий",
    "Заводъ №7",
    "Навигаторъ",
    "Оптика Времени",
    "Механикус",
    "Измеритель",
];

/// Featured seller names.
pub fn featured_sellers() -> &'static [&'static str] {
    &FEATURED_SELLERS
}

/// Per-seller figures derived from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerSummary {
    /// Seller name.
    pub name: String,
    /// Number of listed products.
    pub product_count: usize,
    /// Mean product rating, `None` if the seller lists nothing.
    pub average_rating: Option<f64>,
    /// Reviews summed across products.
    pub total_reviews: u64,
}

impl SellerSummary {
    /// Aggregate the products listed by `name` (exact match).
    pub fn for_seller(products: &[Product], name: &str) -> Self {
        let listed: Vec<&Product> = products.iter().filter(|p| p.seller == name).collect();
        let product_count = listed.len();
        let average_rating = (product_count > 0)
            .then(|| listed.iter().map(|p| p.rating).sum::<f64>() / product_count as f64);
        let total_reviews = listed.iter().map(|p| u64::from(p.reviews)).sum();

        Self {
            name: name.to_string(),
            product_count,
            average_rating,
            total_reviews,
        }
    }
}

/// Summaries for every featured seller.
pub fn seller_directory(catalog: &Catalog) -> Vec<SellerSummary> {
    featured_sellers()
        .iter()
        .map(|name| SellerSummary::for_seller(catalog.products(), name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_order() {
        let directory = seller_directory(&Catalog::seeded());
        let names: Vec<&str> = directory.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, FEATURED_SELLERS);
    }

    #[test]
    fn test_single_product_seller() {
        let catalog = Catalog::seeded();
        let summary = SellerSummary::for_seller(catalog.products(), "Механикус");
        assert_eq!(summary.product_count, 1);
        assert_eq!(summary.average_rating, Some(4.9));
        assert_eq!(summary.total_reviews, 312);
    }

    #[test]
    fn test_unknown_seller() {
        let catalog = Catalog::seeded();
        let summary = SellerSummary::for_seller(catalog.products(), "Никто");
        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.average_rating, None);
        assert_eq!(summary.total_reviews, 0);
    }
}
