//! About page.

pub fn render_about() -> String {
    r#"<section class="page about card neon-card" data-view="about">
    <h2 class="neon-glow">О нас</h2>
    <p><strong>Костярокъ</strong> — первый паровой маркетплейс Империи, объединяющий мастеров механизмов и любителей стимпанк-культуры.</p>
    <p>Основан в 1889 году мастером Григорием Костяровым, наш маркетплейс стал домом для тысяч уникальных изделий: от микроскопических часовых механизмов до полноразмерных паровых двигателей.</p>
    <div class="stats">
        <div class="stat"><div class="stat-icon">⚙️</div><p class="stat-value">2500+</p><p class="stat-label">Товаров</p></div>
        <div class="stat"><div class="stat-icon">👤</div><p class="stat-value">450+</p><p class="stat-label">Мастеров</p></div>
        <div class="stat"><div class="stat-icon">⭐</div><p class="stat-value">4.8</p><p class="stat-label">Средний рейтинг</p></div>
    </div>
</section>"#
        .to_string()
}
