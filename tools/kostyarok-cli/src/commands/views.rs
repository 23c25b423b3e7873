//! List storefront views.

use anyhow::Result;
use kostyarok_storefront::list_views;
use serde::Serialize;

use crate::context::Context;
use crate::output::pad;

#[derive(Serialize)]
struct ViewRow {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
}

/// Run the views command.
pub fn run(ctx: &Context) -> Result<()> {
    let rows: Vec<ViewRow> = list_views()
        .into_iter()
        .map(|v| ViewRow {
            id: v.id(),
            label: v.label(),
            icon: v.icon(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Views");
    for row in &rows {
        ctx.output.list_item(&format!("{} {}", pad(row.id, 10), row.label));
    }

    Ok(())
}
