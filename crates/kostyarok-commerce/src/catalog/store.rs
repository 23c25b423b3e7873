//! In-memory catalog store.

use crate::catalog::{seed_products, Category, CategoryId, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{apply_filter, FilterCriteria};
use serde::{Deserialize, Serialize};

/// Number of products shown in the "popular" strip on the home page.
pub const POPULAR_COUNT: usize = 4;

/// Immutable product and category lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Catalog with the built-in storefront contents.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// Catalog over an arbitrary product list, with every known category.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            categories: CategoryId::ALL.into_iter().map(Category::new).collect(),
        }
    }

    /// All products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but an absent id is an error.
    pub fn product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::UnknownProduct(id.get()))
    }

    /// Look up a category record.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Leading products featured on the home page.
    pub fn popular(&self) -> &[Product] {
        &self.products[..self.products.len().min(POPULAR_COUNT)]
    }

    /// Products matching the criteria, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Product> {
        apply_filter(&self.products, criteria)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.categories().len(), 5);

        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::seeded();
        let compass = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(compass.name, "Латунный Компас");
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert_eq!(
            catalog.product(ProductId::new(99)),
            Err(CommerceError::UnknownProduct(99))
        );

        let engines = catalog.category(CategoryId::Engines).unwrap();
        assert_eq!(engines.name, "Двигатели");
    }

    #[test]
    fn test_popular() {
        let catalog = Catalog::seeded();
        let names: Vec<&str> = catalog.popular().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Паровой Хронометр", "Медная Шестеренка", "Латунный Компас", "Викторианские Очки"]
        );

        assert!(Catalog::new(Vec::new()).popular().is_empty());
    }
}
