//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("log_level", &ctx.config.log_level);

    let filter = &ctx.config.filter;
    ctx.output.info("[filter]");
    ctx.output.kv("search", &filter.search);
    ctx.output.kv("category", &filter.category);
    ctx.output.kv("min_price", &filter.min_price.to_string());
    ctx.output.kv("max_price", &filter.max_price.to_string());
    ctx.output.kv("min_rating", &filter.min_rating.to_string());

    ctx.output.info("[output]");
    ctx.output.kv("color", &ctx.config.output.color.to_string());

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(path);

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    if path.extension().is_some_and(|ext| ext == "json") {
        CliConfig::default().save(&path.to_string_lossy())?;
    } else {
        std::fs::write(&path, generate_default_config())?;
    }
    ctx.output.success(&format!("Created {}", path.display()));

    Ok(())
}
