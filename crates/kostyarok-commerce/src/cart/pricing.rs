//! Cart total calculation.

use crate::cart::Cart;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Price breakdown for one cart line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

/// Totals derived from the current cart contents.
///
/// Always computed on demand from the cart, never stored alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineTotal>,
    /// Sum of quantities (cart badge count).
    pub item_count: u64,
    /// Grand total.
    pub total: Money,
}

impl CartTotals {
    /// Compute totals for a cart.
    pub fn calculate(cart: &Cart) -> Self {
        let lines: Vec<LineTotal> = cart
            .items()
            .map(|item| LineTotal {
                product_id: item.id,
                unit_price: item.price,
                quantity: item.quantity,
                subtotal: item.subtotal(),
            })
            .collect();

        Self {
            item_count: cart.item_count(),
            total: lines.iter().map(|l| l.subtotal).sum(),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_totals_match_cart() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.add(catalog.get(ProductId::new(1)).unwrap());
        cart.add(catalog.get(ProductId::new(2)).unwrap());
        cart.update_quantity(ProductId::new(2), 2);

        let totals = CartTotals::calculate(&cart);
        assert_eq!(totals.total, Money::new(6280));
        assert_eq!(totals.total, cart.total());
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.lines[1].subtotal, Money::new(1780));
    }

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::calculate(&Cart::new());
        assert!(totals.lines.is_empty());
        assert_eq!(totals.total, Money::ZERO);
    }
}
