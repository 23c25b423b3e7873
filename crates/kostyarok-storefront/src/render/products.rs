//! Product cards.

use kostyarok_commerce::catalog::Product;

use super::html::{html_escape, icon, render_stars};

/// Render a product card with its add-to-cart button.
pub fn render_product_card(product: &Product, with_category: bool) -> String {
    let badge = if with_category {
        format!(
            r#"<span class="badge secondary">{}</span>"#,
            product.category.display_name()
        )
    } else {
        String::new()
    };

    format!(
        r#"<article class="card neon-card product-card" data-product-id="{id}">
    <header>
        <div class="product-image">{image}</div>
        {badge}
        <h3 class="card-title">{name}</h3>
        <p class="card-description">{seller}</p>
    </header>
    <div class="card-content">
        {stars}
        <p class="reviews">{reviews} отзывов</p>
        <p class="price">{price}</p>
    </div>
    <footer>
        <button class="btn add-to-cart" data-action="add" data-product-id="{id}">{cart_icon}В корзину</button>
    </footer>
</article>"#,
        id = product.id,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        seller = html_escape(&product.seller),
        stars = render_stars(product.rating),
        reviews = product.reviews,
        price = product.price.display(),
        cart_icon = icon("ShoppingCart"),
    )
}

/// Render a grid of product cards.
pub fn render_product_grid(products: &[Product], with_category: bool) -> String {
    let cards: Vec<String> = products
        .iter()
        .map(|p| render_product_card(p, with_category))
        .collect();

    format!(r#"<div class="product-grid">{}</div>"#, cards.join("\n"))
}
