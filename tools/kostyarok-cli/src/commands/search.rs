//! Filter the catalog from the command line.

use anyhow::{Context as _, Result};
use kostyarok_commerce::catalog::{Catalog, CategoryFilter};
use kostyarok_commerce::search::FilterCriteria;

use super::catalog::print_products;
use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let criteria = build_criteria(&args, ctx)?;
    ctx.output.debug(&format!("criteria: {:?}", criteria));

    let found = Catalog::seeded().filter(&criteria);

    if ctx.output.is_json() {
        ctx.output.json(&found);
        return Ok(());
    }

    if found.is_empty() {
        ctx.output.warn("Товары не найдены");
        ctx.output.info("Попробуйте изменить параметры поиска или фильтры");
        return Ok(());
    }

    ctx.output.header(&format!("Found {} products", found.len()));
    print_products(ctx, &found);

    Ok(())
}

/// Merge command-line flags over the configured filter.
fn build_criteria(args: &SearchArgs, ctx: &Context) -> Result<FilterCriteria> {
    let mut criteria = ctx.config.filter.to_criteria()?;

    if let Some(query) = &args.query {
        criteria.search = query.clone();
    }
    if let Some(category) = &args.category {
        criteria.category = category
            .parse::<CategoryFilter>()
            .with_context(|| format!("Invalid --category: {}", category))?;
    }

    let min = args.min_price.unwrap_or(criteria.price_range.min.amount());
    let max = args.max_price.unwrap_or(criteria.price_range.max.amount());
    criteria = criteria.with_price_range(min, max);

    if let Some(rating) = args.min_rating {
        criteria.min_rating = rating;
    }

    Ok(criteria)
}
