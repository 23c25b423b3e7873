//! Home page: hero banner and popular products.

use kostyarok_commerce::catalog::Catalog;

use super::html::icon;
use super::products::render_product_grid;

pub fn render_home(catalog: &Catalog) -> String {
    format!(
        r#"<div class="page home" data-view="home">
    <section class="hero neon-card">
        <div class="gear gear-top">⚙️</div>
        <div class="gear gear-bottom">⚙️</div>
        <h1 class="neon-glow">КОСТЯРОКЪ</h1>
        <p class="tagline">Паровой Маркетплейсъ Механизмовъ</p>
        <p class="lead">Откройте для себя уникальные стимпанк-товары от лучших мастеров Империи. Часовые механизмы, паровые двигатели и викторианские аксессуары ждут вас!</p>
        <button class="btn neon-border" data-action="navigate" data-view="catalog">{bag}Перейти в каталог</button>
    </section>
    <section class="popular">
        <h2 class="neon-glow">Популярные товары</h2>
        {grid}
    </section>
</div>"#,
        bag = icon("ShoppingBag"),
        grid = render_product_grid(catalog.popular(), false),
    )
}
