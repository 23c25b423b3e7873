//! CLI configuration.

use anyhow::{Context, Result};
use kostyarok_commerce::catalog::CategoryFilter;
use kostyarok_commerce::search::{FilterCriteria, PRICE_SLIDER_MAX};
use serde::{Deserialize, Serialize};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "kostyarok.toml";

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Initial filter criteria.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Initial filter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Search text.
    #[serde(default)]
    pub search: String,

    /// Category id or "all".
    #[serde(default = "default_category")]
    pub category: String,

    /// Lower price bound.
    #[serde(default)]
    pub min_price: u64,

    /// Upper price bound.
    #[serde(default = "default_max_price")]
    pub max_price: u64,

    /// Minimum rating.
    #[serde(default)]
    pub min_rating: f64,
}

fn default_category() -> String {
    "all".to_string()
}

fn default_max_price() -> u64 {
    PRICE_SLIDER_MAX
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_category(),
            min_price: 0,
            max_price: default_max_price(),
            min_rating: 0.0,
        }
    }
}

impl FilterConfig {
    /// Build filter criteria, failing on an unknown category.
    pub fn to_criteria(&self) -> Result<FilterCriteria> {
        let category: CategoryFilter = self
            .category
            .parse()
            .with_context(|| format!("Invalid [filter] category: {}", self.category))?;

        Ok(FilterCriteria::new()
            .with_search(self.search.clone())
            .with_category(category)
            .with_price_range(self.min_price, self.max_price)
            .with_min_rating(self.min_rating))
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Colored terminal output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Generate a default kostyarok.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Kostyarok storefront configuration

# Used when RUST_LOG is not set
log_level = "warn"

# Initial catalog filter
[filter]
search = ""
category = "all"
min_price = 0
max_price = {PRICE_SLIDER_MAX}
min_rating = 0.0

[output]
color = true
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kostyarok_commerce::catalog::CategoryId;

    #[test]
    fn test_generated_config_parses_to_default() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[filter]
category = "engines"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.filter.max_price, 10_000);
        let criteria = config.filter.to_criteria().unwrap();
        assert_eq!(criteria.category, CategoryFilter::Only(CategoryId::Engines));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let filter = FilterConfig {
            category: "boats".into(),
            ..FilterConfig::default()
        };
        assert!(filter.to_criteria().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        for name in [CONFIG_FILE_NAME, "kostyarok.json"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();

            let mut config = CliConfig::default();
            config.filter.search = "часы".into();
            config.output.color = false;
            config.save(path).unwrap();

            assert_eq!(CliConfig::load(path).unwrap(), config);
        }
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
