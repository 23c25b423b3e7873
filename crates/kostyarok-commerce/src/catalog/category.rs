//! Category types for product organization.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// Chronometers and pocket watches.
    Watches,
    /// Gears and other mechanism parts.
    Parts,
    /// Compasses, gauges and measuring devices.
    Instruments,
    /// Goggles, belts and other wearables.
    Accessories,
    /// Steam engines.
    Engines,
}

impl CategoryId {
    /// Every category, in display order.
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Watches,
        CategoryId::Parts,
        CategoryId::Instruments,
        CategoryId::Accessories,
        CategoryId::Engines,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Watches => "watches",
            CategoryId::Parts => "parts",
            CategoryId::Instruments => "instruments",
            CategoryId::Accessories => "accessories",
            CategoryId::Engines => "engines",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::Watches => "Хронометры",
            CategoryId::Parts => "Механизмы",
            CategoryId::Instruments => "Приборы",
            CategoryId::Accessories => "Аксессуары",
            CategoryId::Engines => "Двигатели",
        }
    }

    /// Icon name used by the view layer.
    pub fn icon(&self) -> &'static str {
        match self {
            CategoryId::Watches => "Clock",
            CategoryId::Parts => "Settings",
            CategoryId::Instruments => "Gauge",
            CategoryId::Accessories => "Sparkles",
            CategoryId::Engines => "Zap",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CategoryId::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

/// A product category record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Icon reference.
    pub icon: String,
}

impl Category {
    /// Build the record for a category id.
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            icon: id.icon().to_string(),
        }
    }
}

/// Category selection in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products in one category.
    Only(CategoryId),
}

impl CategoryFilter {
    /// The "all" option followed by every category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(CategoryId::ALL.map(CategoryFilter::Only))
    }

    /// Check whether a product category passes this selection.
    pub fn admits(&self, category: CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => *id == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(id) => id.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все категории",
            CategoryFilter::Only(id) => id.display_name(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Package",
            CategoryFilter::Only(id) => id.icon(),
        }
    }
}

impl From<CategoryId> for CategoryFilter {
    fn from(id: CategoryId) -> Self {
        CategoryFilter::Only(id)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("watches".parse::<CategoryId>(), Ok(CategoryId::Watches));
        assert_eq!(" Engines ".parse::<CategoryId>(), Ok(CategoryId::Engines));
        assert_eq!(
            "boats".parse::<CategoryId>(),
            Err(CommerceError::UnknownCategory("boats".into()))
        );
    }

    #[test]
    fn test_category_record() {
        let cat = Category::new(CategoryId::Instruments);
        assert_eq!(cat.name, "Приборы");
        assert_eq!(cat.icon, "Gauge");
    }

    #[test]
    fn test_filter_admits() {
        assert!(CategoryFilter::All.admits(CategoryId::Parts));
        assert!(CategoryFilter::Only(CategoryId::Parts).admits(CategoryId::Parts));
        assert!(!CategoryFilter::Only(CategoryId::Parts).admits(CategoryId::Watches));
    }

    #[test]
    fn test_filter_parse_and_options() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "parts".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(CategoryId::Parts))
        );

        let ids: Vec<&str> = CategoryFilter::options().map(|c| c.as_str()).collect();
        assert_eq!(
            ids,
            ["all", "watches", "parts", "instruments", "accessories", "engines"]
        );
    }
}
