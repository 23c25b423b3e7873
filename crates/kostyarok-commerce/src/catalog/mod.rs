//! Product catalog module.
//!
//! Contains the product and category records, the built-in seed data and
//! seller aggregates.

mod category;
mod product;
mod seed;
mod sellers;
mod store;

pub use category::{Category, CategoryFilter, CategoryId};
pub use product::{full_stars, Product, MAX_RATING};
pub use seed::seed_products;
pub use sellers::{featured_sellers, seller_directory, SellerSummary, FEATURED_SELLERS};
pub use store::{Catalog, POPULAR_COUNT};
