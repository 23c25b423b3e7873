//! Catalog page: search box, filter panel, category chips and results.

use kostyarok_commerce::catalog::{CategoryFilter, Product};
use kostyarok_commerce::search::{
    FilterCriteria, PRICE_SLIDER_MAX, PRICE_SLIDER_STEP, RATING_SLIDER_MAX, RATING_SLIDER_STEP,
};

use super::html::{html_escape, icon};
use super::products::render_product_grid;

/// Render the catalog page for the given criteria and filtered products.
pub fn render_catalog(criteria: &FilterCriteria, products: &[Product]) -> String {
    let results = if products.is_empty() {
        render_empty_state()
    } else {
        render_product_grid(products, true)
    };

    format!(
        r#"<div class="page catalog" data-view="catalog">
    <div class="catalog-toolbar">
        <label class="search-box">{search_icon}<input type="search" name="search" placeholder="Поиск товаров или продавцов..." value="{search}"></label>
        {filters}
    </div>
    {chips}
    {results}
</div>"#,
        search_icon = icon("Search"),
        search = html_escape(&criteria.search),
        filters = render_filter_panel(criteria),
        chips = render_category_chips(criteria.category),
    )
}

fn render_filter_panel(criteria: &FilterCriteria) -> String {
    let options: String = CategoryFilter::options()
        .map(|c| {
            let selected = if c == criteria.category { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                c.as_str(),
                selected,
                c.display_name()
            )
        })
        .collect();

    let min = criteria.price_range.min.amount();
    let max = criteria.price_range.max.amount();
    let rating = criteria.min_rating;
    let active = if criteria.is_default() { "" } else { " active" };

    format!(
        r#"<details class="filter-panel{active}">
            <summary class="btn outline neon-border">{filter_icon}Фильтры</summary>
            <h3 class="neon-glow">Фильтры поиска</h3>
            <p>Настройте параметры для точного поиска</p>
            <label>Категория<select name="category">{options}</select></label>
            <label>Цена: {min}₽ - {max}₽
                <input type="range" name="min_price" min="0" max="{PRICE_SLIDER_MAX}" step="{PRICE_SLIDER_STEP}" value="{min}">
                <input type="range" name="max_price" min="0" max="{PRICE_SLIDER_MAX}" step="{PRICE_SLIDER_STEP}" value="{max}">
            </label>
            <label>Минимальный рейтинг: {rating}
                <input type="range" name="min_rating" min="0" max="{RATING_SLIDER_MAX}" step="{RATING_SLIDER_STEP}" value="{rating}">
            </label>
        </details>"#,
        filter_icon = icon("Filter"),
    )
}

fn render_category_chips(selected: CategoryFilter) -> String {
    let chips: Vec<String> = CategoryFilter::options()
        .map(|c| {
            let class = if c == selected { "chip selected neon-border" } else { "chip outline" };
            format!(
                r#"<button class="{class}" data-action="category" data-category="{id}">{icon}{name}</button>"#,
                id = c.as_str(),
                icon = icon(c.icon()),
                name = c.display_name(),
            )
        })
        .collect();

    format!(r#"<div class="category-chips">{}</div>"#, chips.join(""))
}

fn render_empty_state() -> String {
    r#"<div class="empty-state">
        <p class="empty-title">Товары не найдены</p>
        <p class="empty-hint">Попробуйте изменить параметры поиска</p>
    </div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kostyarok_commerce::catalog::{Catalog, CategoryId};

    #[test]
    fn test_catalog_lists_filtered_products() {
        let catalog = Catalog::seeded();
        let criteria = FilterCriteria::new().with_category(CategoryId::Watches);
        let html = render_catalog(&criteria, &catalog.filter(&criteria));

        assert_eq!(html.matches("product-card").count(), 2);
        let chip = r#"chip selected neon-border" data-action="category" data-category="watches""#;
        assert!(html.contains(chip));
        assert!(html.contains("filter-panel active"));
    }

    #[test]
    fn test_catalog_empty_state() {
        let criteria = FilterCriteria::new().with_search("нет такого");
        let html = render_catalog(&criteria, &[]);
        assert!(html.contains("Товары не найдены"));
        assert!(!html.contains("product-grid"));
    }

    #[test]
    fn test_search_text_is_escaped() {
        let criteria = FilterCriteria::new().with_search(r#""><script>"#);
        let html = render_catalog(&criteria, &[]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
