//! Session state and HTML views for the Kostyarok storefront.
//!
//! - [`View`] - the six navigation pages
//! - [`AppState`] / [`Action`] - one session's state and its reducer
//! - [`render`] - HTML for the current view wrapped in the page chrome

mod error;
pub mod render;
mod state;
mod view;

pub use error::StorefrontError;
pub use render::{render, render_view};
pub use state::{Action, AppState, Notice};
pub use view::{list_views, View};

// Re-export the domain crate for convenience
pub use kostyarok_commerce;
