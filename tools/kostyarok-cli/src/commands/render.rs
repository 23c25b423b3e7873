//! Print the HTML of a storefront view.

use anyhow::Result;
use kostyarok_storefront::{render, render_view, AppState, View};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let view: View = args.view.parse()?;
    let criteria = ctx.config.filter.to_criteria()?;
    let state = AppState::new().with_view(view).with_criteria(criteria);

    let html = if args.full {
        render(&state)
    } else {
        render_view(&state)
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "view": view.id(), "html": html }));
    } else {
        println!("{}", html);
    }

    Ok(())
}
