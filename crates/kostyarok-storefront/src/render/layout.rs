//! Page chrome: navigation bar, cart panel, checkout dialog and footer.

use kostyarok_commerce::checkout::{CheckoutSession, PaymentField};

use super::html::{html_escape, icon};
use crate::view::View;

/// Navigation bar with the cart button and its item-count badge.
pub fn render_nav(current: View, checkout: &CheckoutSession) -> String {
    let links: String = View::ALL
        .iter()
        .map(|v| {
            let class = if *v == current {
                "btn nav-link active neon-border"
            } else {
                "btn nav-link ghost"
            };
            format!(
                r#"<button class="{class}" data-action="navigate" data-view="{id}">{icon}{label}</button>"#,
                id = v.id(),
                icon = icon(v.icon()),
                label = v.label(),
            )
        })
        .collect();

    let badge = if checkout.cart().is_empty() {
        String::new()
    } else {
        format!(r#"<span class="badge cart-count">{}</span>"#, checkout.item_count())
    };

    format!(
        r#"<nav class="site-nav neon-border">
    <a class="logo" data-action="navigate" data-view="home"><span class="gear">⚙️</span><span class="neon-glow">КОСТЯРОКЪ</span></a>
    <div class="nav-links">{links}</div>
    <button class="btn outline cart-button neon-border" data-action="toggle-cart">{cart_icon}{badge}</button>
</nav>"#,
        cart_icon = icon("ShoppingCart"),
    )
}

/// Cart side panel, including the checkout dialog when open.
pub fn render_cart_panel(checkout: &CheckoutSession) -> String {
    let body = if checkout.cart().is_empty() {
        r#"<p class="cart-empty">Корзина пуста</p>"#.to_string()
    } else {
        let rows: Vec<String> = checkout
            .cart()
            .items()
            .map(|item| {
                format!(
                    r#"<div class="card cart-row" data-product-id="{id}">
            <div class="cart-image">{image}</div>
            <div class="cart-info"><p class="cart-name">{name}</p><p class="cart-price">{price}</p></div>
            <div class="cart-qty">
                <button class="btn icon" data-action="qty" data-product-id="{id}" data-quantity="{minus}">{minus_icon}</button>
                <span class="qty">{qty}</span>
                <button class="btn icon" data-action="qty" data-product-id="{id}" data-quantity="{plus}">{plus_icon}</button>
            </div>
            <button class="btn icon ghost" data-action="remove" data-product-id="{id}">{trash}</button>
        </div>"#,
                    id = item.id,
                    image = html_escape(&item.image),
                    name = html_escape(&item.name),
                    price = item.price.display(),
                    qty = item.quantity,
                    minus = i64::from(item.quantity) - 1,
                    plus = i64::from(item.quantity) + 1,
                    minus_icon = icon("Minus"),
                    plus_icon = icon("Plus"),
                    trash = icon("Trash2"),
                )
            })
            .collect();

        let dialog = if checkout.is_checkout_open() {
            render_checkout_dialog(checkout)
        } else {
            String::new()
        };

        format!(
            r#"{rows}
        <hr>
        <div class="cart-total"><span>Итого:</span><span class="total">{total}</span></div>
        <button class="btn neon-border" data-action="checkout">{card}Оформить заказ</button>
        {dialog}"#,
            rows = rows.join("\n"),
            total = checkout.total_amount().display(),
            card = icon("CreditCard"),
        )
    };

    format!(
        r#"<aside class="cart-panel">
    <h2 class="neon-glow">Корзина</h2>
    {body}
</aside>"#
    )
}

fn render_checkout_dialog(checkout: &CheckoutSession) -> String {
    let form = checkout.payment_form();
    let fields: String = PaymentField::ALL
        .iter()
        .map(|field| {
            let input_type = if field.is_secret() { "password" } else { "text" };
            let max_len = if field.is_secret() { r#" maxlength="3""# } else { "" };
            format!(
                r#"<label for="{id}">{label}</label><input id="{id}" name="{id}" type="{input_type}"{max_len} placeholder="{placeholder}" value="{value}">"#,
                id = field.as_str(),
                label = field.label(),
                placeholder = field.placeholder(),
                value = html_escape(form.get(*field)),
            )
        })
        .collect();

    let total = checkout.total_amount().display();
    format!(
        r#"<dialog class="checkout-dialog" open>
            <h3 class="neon-glow">Оплата заказа</h3>
            <p>Введите данные карты для оплаты заказа на сумму {total}</p>
            <form class="payment-form" onsubmit="return false">{fields}</form>
            <button class="btn neon-border" data-action="pay">{lock}Оплатить {total}</button>
        </dialog>"#,
        lock = icon("Lock"),
    )
}

pub fn render_footer() -> String {
    r#"<footer class="site-footer neon-border">
    <div class="footer-logo"><span>⚙️</span><span class="neon-glow">КОСТЯРОКЪ</span></div>
    <p>Паровой Маркетплейсъ Механизмовъ</p>
    <p class="copyright">© 1889-2025 Все права защищены</p>
</footer>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kostyarok_commerce::catalog::Catalog;
    use kostyarok_commerce::ProductId;

    fn session_with_gear() -> CheckoutSession {
        let catalog = Catalog::seeded();
        let mut session = CheckoutSession::new();
        let gear = catalog.get(ProductId::new(2)).unwrap();
        session.add_to_cart(gear);
        session.add_to_cart(gear);
        session
    }

    #[test]
    fn test_nav_marks_current_view() {
        let html = render_nav(View::Contacts, &CheckoutSession::new());
        let current = r#"active neon-border" data-action="navigate" data-view="contacts""#;
        assert!(html.contains(current));
        assert!(!html.contains("cart-count"));
    }

    #[test]
    fn test_badge_counts_units() {
        let html = render_nav(View::Home, &session_with_gear());
        assert!(html.contains(r#"<span class="badge cart-count">2</span>"#));
    }

    #[test]
    fn test_empty_cart_panel() {
        let html = render_cart_panel(&CheckoutSession::new());
        assert!(html.contains("Корзина пуста"));
        assert!(!html.contains("checkout-dialog"));
    }

    #[test]
    fn test_cart_panel_rows_and_total() {
        let html = render_cart_panel(&session_with_gear());
        assert!(html.contains("Медная Шестеренка"));
        assert!(html.contains("1780₽"));
        assert!(html.contains(r#"data-quantity="1""#));
        assert!(html.contains(r#"data-quantity="3""#));
        assert!(!html.contains("checkout-dialog"));
    }

    #[test]
    fn test_checkout_dialog_when_open() {
        let mut session = session_with_gear();
        session.open_checkout();
        session.set_payment_field(PaymentField::CardHolder, "IVAN <b>");
        let html = render_cart_panel(&session);
        assert!(html.contains("checkout-dialog"));
        assert!(html.contains("Оплатить 1780₽"));
        assert!(html.contains("IVAN &lt;b&gt;"));
        assert!(html.contains(r#"type="password" maxlength="3""#));
    }
}
