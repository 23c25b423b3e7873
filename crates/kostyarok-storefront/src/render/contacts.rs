//! Contacts page.

use super::html::icon;

pub fn render_contacts() -> String {
    format!(
        r#"<section class="page contacts card neon-card" data-view="contacts">
    <h2 class="neon-glow">Контакты</h2>
    <div class="contact">{pin}<div><p class="contact-title">Адрес</p><p>г. Санкт-Петербургъ, Механическая улица, д. 42</p></div></div>
    <hr>
    <div class="contact">{mail}<div><p class="contact-title">Электронная почта</p><p>info@kostyarok.empire</p></div></div>
    <hr>
    <div class="contact">{clock}<div><p class="contact-title">Часы работы</p><p>Понедельникъ - Суббота: 9:00 - 18:00</p><p>Воскресенье: выходной</p></div></div>
</section>"#,
        pin = icon("MapPin"),
        mail = icon("Mail"),
        clock = icon("Clock"),
    )
}
