//! Cart and cart item types.

use crate::catalog::{CategoryId, Product};
use crate::ids::ProductId;
use crate::money::Money;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A product snapshot with a chosen quantity.
///
/// Fields are copied from the catalog when the product is first added, so
/// the item is independent of the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Seller name.
    pub seller: String,
    /// Rating at the time of adding.
    pub rating: f64,
    /// Review count at the time of adding.
    pub reviews: u32,
    /// Product category.
    pub category: CategoryId,
    /// Display glyph.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            seller: product.seller.clone(),
            rating: product.rating,
            reviews: product.reviews,
            category: product.category,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.price * self.quantity
    }
}

/// A shopping cart keyed by product, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: IndexMap<ProductId, CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity if the product is already present, otherwise
    /// inserts a snapshot with quantity 1.
    pub fn add(&mut self, product: &Product) {
        match self.items.get_mut(&product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                tracing::debug!(
                    product = %product.id,
                    quantity = item.quantity,
                    "cart quantity incremented"
                );
            }
            None => {
                self.items.insert(product.id, CartItem::from_product(product));
                tracing::debug!(product = %product.id, "product added to cart");
            }
        }
    }

    /// Remove a product. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let removed = self.items.shift_remove(&id).is_some();
        if removed {
            tracing::debug!(product = %id, "product removed from cart");
        }
        removed
    }

    /// Set a product's quantity.
    ///
    /// A quantity of zero or below removes the item. Quantities above
    /// `u32::MAX` saturate. Products not in the cart are left alone.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        if let Some(item) = self.items.get_mut(&id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            tracing::debug!(product = %id, quantity = item.quantity, "cart quantity set");
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get an item by product ID.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.get(&id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.items.values().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price times quantity over all items.
    pub fn total(&self) -> Money {
        self.items.values().map(CartItem::subtotal).sum()
    }
}
