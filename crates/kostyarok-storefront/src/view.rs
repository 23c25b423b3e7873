//! Storefront views.

use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Catalog,
    About,
    Sellers,
    #[serde(rename = "add")]
    AddProduct,
    Contacts,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [View; 6] = [
        View::Home,
        View::Catalog,
        View::About,
        View::Sellers,
        View::AddProduct,
        View::Contacts,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Catalog => "catalog",
            View::About => "about",
            View::Sellers => "sellers",
            View::AddProduct => "add",
            View::Contacts => "contacts",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Главная",
            View::Catalog => "Каталог",
            View::About => "О нас",
            View::Sellers => "Продавцы",
            View::AddProduct => "Выставить товар",
            View::Contacts => "Контакты",
        }
    }

    /// Navigation icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Catalog => "Package",
            View::About => "Info",
            View::Sellers => "Store",
            View::AddProduct => "Upload",
            View::Contacts => "Mail",
        }
    }
}

/// All storefront views, in navigation order.
pub fn list_views() -> [View; 6] {
    View::ALL
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        View::ALL
            .into_iter()
            .find(|v| v.id() == wanted)
            .ok_or_else(|| StorefrontError::UnknownView(s.to_string()))
    }
}
