//! Kostyarok CLI - browse the catalog and run a shopping session.
//!
//! Commands:
//! - `kostyarok views` - List storefront views
//! - `kostyarok catalog` - List all products
//! - `kostyarok categories` - List categories
//! - `kostyarok search` - Filter the catalog
//! - `kostyarok sellers` - Show the seller directory
//! - `kostyarok render` - Print the HTML of a view
//! - `kostyarok shop` - Interactive shopping session
//! - `kostyarok config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, RenderArgs, SearchArgs, ShopArgs};

/// Kostyarok - steam-powered marketplace of mechanisms
#[derive(Parser)]
#[command(name = "kostyarok")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List storefront views
    Views,

    /// List every product in the catalog
    Catalog,

    /// List product categories
    Categories,

    /// Filter the catalog
    Search(SearchArgs),

    /// Show the featured seller directory
    Sellers,

    /// Print the HTML of a view
    Render(RenderArgs),

    /// Run an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init_tracing(&ctx.config.log_level, cli.verbose);
    console::set_colors_enabled(ctx.config.output.color);

    let result = match cli.command {
        Commands::Views => commands::views::run(&ctx),
        Commands::Catalog => commands::catalog::run_catalog(&ctx),
        Commands::Categories => commands::catalog::run_categories(&ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Sellers => commands::sellers::run(&ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
