//! Storefront error types.

use kostyarok_commerce::CommerceError;
use thiserror::Error;

/// Errors raised while interpreting user input for the storefront.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// View id not one of the six storefront pages.
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// Commerce value could not be parsed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
