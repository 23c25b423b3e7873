//! HTML rendering for the storefront views.
//!
//! Each section renders to a `String` fragment; [`render`] dispatches on the
//! current [`View`] and wraps the page in the shared chrome.

mod about;
mod add_product;
mod catalog;
mod contacts;
mod home;
mod html;
mod layout;
mod products;
mod sellers;

pub use about::render_about;
pub use add_product::render_add_product;
pub use catalog::render_catalog;
pub use contacts::render_contacts;
pub use home::render_home;
pub use layout::{render_cart_panel, render_footer, render_nav};
pub use products::{render_product_card, render_product_grid};
pub use sellers::render_sellers;

use kostyarok_commerce::catalog::seller_directory;

use crate::state::AppState;
use crate::view::View;

/// Render the main content of the current view.
pub fn render_view(state: &AppState) -> String {
    match state.view() {
        View::Home => render_home(state.catalog()),
        View::Catalog => render_catalog(state.criteria(), &state.filtered_products()),
        View::About => render_about(),
        View::Sellers => render_sellers(&seller_directory(state.catalog())),
        View::AddProduct => render_add_product(),
        View::Contacts => render_contacts(),
    }
}

/// Render the full page for a session.
pub fn render(state: &AppState) -> String {
    format!(
        r#"<div class="app" data-view="{view}">
{nav}
{cart}
<main class="container">
{content}
</main>
{footer}
</div>"#,
        view = state.view().id(),
        nav = render_nav(state.view(), state.checkout()),
        cart = render_cart_panel(state.checkout()),
        content = render_view(state),
        footer = render_footer(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;

    #[test]
    fn test_every_view_renders_its_marker() {
        for view in View::ALL {
            let state = AppState::new().with_view(view);
            let content = render_view(&state);
            assert!(
                content.contains(&format!(r#"data-view="{}""#, view.id())),
                "view {} did not render",
                view
            );

            let page = render(&state);
            assert!(page.contains(&content));
            assert!(page.contains("site-nav"));
            assert!(page.contains("site-footer"));
        }
    }

    #[test]
    fn test_catalog_view_follows_criteria() {
        let mut state = AppState::new().with_view(View::Catalog);
        state.apply(Action::SetSearch("компас".into()));
        let html = render_view(&state);
        assert_eq!(html.matches("product-card").count(), 1);
        assert!(html.contains("Латунный Компас"));
    }
}
