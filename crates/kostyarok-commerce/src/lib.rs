//! Catalog, filtering and cart/checkout logic for the Kostyarok storefront.
//!
//! - **Catalog**: the built-in products and categories, seller aggregates
//! - **Search**: filter criteria and the catalog filter predicate
//! - **Cart**: cart items keyed by product, totals
//! - **Checkout**: payment form and the cart/checkout state machine
//!
//! Everything is in memory and every operation is total.
//!
//! # Example
//!
//! ```
//! use kostyarok_commerce::prelude::*;
//!
//! let catalog = Catalog::seeded();
//! let found = catalog.filter(&FilterCriteria::new().with_search("хронометр"));
//! assert_eq!(found.len(), 1);
//!
//! let mut session = CheckoutSession::new();
//! session.add_to_cart(&found[0]);
//! session.open_checkout();
//! let confirmation = session.pay();
//! assert_eq!(confirmation.total.display(), "4500₽");
//! assert!(session.cart().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        seller_directory, Catalog, Category, CategoryFilter, CategoryId, Product, SellerSummary,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartTotals, LineTotal};

    // Checkout
    pub use crate::checkout::{
        CheckoutSession, CheckoutState, PaymentConfirmation, PaymentField, PaymentForm,
    };

    // Search
    pub use crate::search::{apply_filter, FilterCriteria, PriceRange};
}
