//! Commerce error types.

use thiserror::Error;

/// Errors raised when turning user text into commerce values.
///
/// Catalog, filter and cart operations themselves never fail; these only
/// surface at parsing boundaries and strict id lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Category id not in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Product id not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(u32),

    /// Payment form field name not recognised.
    #[error("Unknown payment field: {0}")]
    UnknownPaymentField(String),
}
