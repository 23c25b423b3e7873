//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;
pub mod search;
pub mod sellers;
pub mod shop;
pub mod views;

use clap::{Args, Subcommand};

/// Arguments for the search command.
///
/// Unset flags fall back to the `[filter]` section of the config file.
#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive text matched against product and seller names.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Category id, or "all".
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Lower price bound in roubles.
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Upper price bound in roubles.
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Minimum rating (0-5).
    #[arg(short = 'r', long)]
    pub min_rating: Option<f64>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// View id (home, catalog, about, sellers, add, contacts).
    #[arg(default_value = "home")]
    pub view: String,

    /// Wrap the view in navigation, cart panel and footer.
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Start on this view.
    #[arg(long, default_value = "catalog")]
    pub view: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Initialize a new config file.
    Init {
        /// Target file; a `.json` extension writes JSON.
        #[arg(default_value = "kostyarok.toml")]
        path: String,

        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
