//! Seller directory.

use anyhow::Result;
use kostyarok_commerce::catalog::{seller_directory, Catalog};

use crate::context::Context;

const WIDTHS: [usize; 4] = [24, 9, 7, 8];

/// Run the sellers command.
pub fn run(ctx: &Context) -> Result<()> {
    let sellers = seller_directory(&Catalog::seeded());

    if ctx.output.is_json() {
        ctx.output.json(&sellers);
        return Ok(());
    }

    ctx.output.header("Sellers");
    ctx.output.table_row(&["NAME", "PRODUCTS", "RATING", "REVIEWS"], &WIDTHS);
    for s in &sellers {
        let rating = s
            .average_rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        ctx.output.table_row(
            &[
                &s.name,
                &s.product_count.to_string(),
                &rating,
                &s.total_reviews.to_string(),
            ],
            &WIDTHS,
        );
    }

    Ok(())
}
