//! Sellers page: one card per featured seller.

use kostyarok_commerce::catalog::SellerSummary;

use super::html::{html_escape, icon, render_stars};

pub fn render_sellers(sellers: &[SellerSummary]) -> String {
    let cards: Vec<String> = sellers.iter().map(render_seller_card).collect();

    format!(
        r#"<div class="page sellers" data-view="sellers">
    <h2 class="neon-glow">Наши мастера</h2>
    <div class="seller-grid">{}</div>
</div>"#,
        cards.join("\n")
    )
}

fn render_seller_card(seller: &SellerSummary) -> String {
    let stars = match seller.average_rating {
        Some(rating) => render_stars((rating * 10.0).round() / 10.0),
        None => r#"<div class="stars empty">—</div>"#.to_string(),
    };

    format!(
        r#"<article class="card neon-card seller-card">
        <div class="avatar">👤</div>
        <h3 class="card-title">{name}</h3>
        {stars}
        <p class="reviews">{reviews} отзывов</p>
        <p class="product-count">{count} товаров</p>
        <button class="btn outline">{store}Перейти в магазин</button>
    </article>"#,
        name = html_escape(&seller.name),
        reviews = seller.total_reviews,
        count = seller.product_count,
        store = icon("Store"),
    )
}
