//! Search module.
//!
//! Filter criteria and the catalog filter predicate.

mod filter;

pub use filter::{
    apply_filter, FilterCriteria, PriceRange, PRICE_SLIDER_MAX, PRICE_SLIDER_STEP,
    RATING_SLIDER_MAX, RATING_SLIDER_STEP,
};
