//! Listing form. The form is display-only and never submitted anywhere.

use kostyarok_commerce::catalog::CategoryId;

use super::html::icon;

pub fn render_add_product() -> String {
    let options: String = CategoryId::ALL
        .iter()
        .map(|c| format!(r#"<option value="{}">{}</option>"#, c.as_str(), c.display_name()))
        .collect();

    format!(
        r#"<section class="page add-product card neon-card" data-view="add">
    <h2 class="neon-glow">Выставить товар</h2>
    <form class="listing-form" onsubmit="return false">
        <label for="product-name">Название товара</label>
        <input id="product-name" placeholder="Паровой хронометр...">
        <label for="product-price">Цена (₽)</label>
        <input id="product-price" type="number" placeholder="1000">
        <label for="product-category">Категория</label>
        <select id="product-category"><option value="" disabled selected>Выберите категорию</option>{options}</select>
        <label for="product-desc">Описание</label>
        <textarea id="product-desc" rows="4" placeholder="Подробное описание вашего товара..."></textarea>
        <button type="submit" class="btn neon-border">{upload}Выставить товар</button>
    </form>
</section>"#,
        upload = icon("Upload"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_exclude_all() {
        let html = render_add_product();
        assert_eq!(html.matches("<option value=\"").count(), 6);
        assert!(!html.contains(r#"value="all""#));
        assert!(html.contains("Двигатели"));
    }
}
