//! Catalog and category listings.

use anyhow::Result;
use kostyarok_commerce::catalog::{Catalog, Category, CategoryFilter, Product};
use serde::Serialize;

use crate::context::Context;

const WIDTHS: [usize; 6] = [3, 24, 7, 24, 6, 12];

/// Run the catalog command.
pub fn run_catalog(ctx: &Context) -> Result<()> {
    let catalog = Catalog::seeded();

    if ctx.output.is_json() {
        ctx.output.json(&catalog.products());
        return Ok(());
    }

    ctx.output.header(&format!("Catalog ({} products)", catalog.len()));
    print_products(ctx, catalog.products());

    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    #[serde(flatten)]
    category: Category,
    product_count: usize,
}

/// Run the categories command.
pub fn run_categories(ctx: &Context) -> Result<()> {
    let catalog = Catalog::seeded();
    let rows: Vec<CategoryRow> = catalog
        .categories()
        .iter()
        .map(|c| CategoryRow {
            category: c.clone(),
            product_count: catalog
                .products()
                .iter()
                .filter(|p| p.category == c.id)
                .count(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output.list_item(&format!(
        "{} {}",
        CategoryFilter::All.as_str(),
        CategoryFilter::All.display_name()
    ));
    for row in &rows {
        ctx.output.list_item(&format!(
            "{} {} ({})",
            row.category.id, row.category.name, row.product_count
        ));
    }

    Ok(())
}

/// Print products as a table.
pub fn print_products(ctx: &Context, products: &[Product]) {
    let header = ["ID", "NAME", "PRICE", "SELLER", "RATING", "CATEGORY"];
    ctx.output.table_row(&header, &WIDTHS);
    for p in products {
        ctx.output.table_row(
            &[
                &p.id.to_string(),
                &p.name,
                &p.price.display(),
                &p.seller,
                &format!("{:.1}", p.rating),
                p.category.as_str(),
            ],
            &WIDTHS,
        );
    }
}
