//! Built-in catalog contents.

use crate::catalog::{CategoryId, Product};

/// The eight products listed on the storefront, in display order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Паровой Хронометр", 4500, "Мастер Григорий", CategoryId::Watches)
            .with_rating(4.8, 156)
            .with_image("⌚"),
        Product::new(2, "Медная Шестеренка", 890, "Заводъ №7", CategoryId::Parts)
            .with_rating(4.5, 89)
            .with_image("⚙️"),
        Product::new(3, "Латунный Компас", 2300, "Навигаторъ", CategoryId::Instruments)
            .with_rating(4.9, 234)
            .with_image("🧭"),
        Product::new(4, "Викторианские Очки", 1200, "Оптика Времени", CategoryId::Accessories)
            .with_rating(4.6, 178)
            .with_image("👓"),
        Product::new(5, "Паровой Двигатель", 8900, "Механикус", CategoryId::Engines)
            .with_rating(4.9, 312)
            .with_image("🔧"),
        Product::new(6, "Манометр Давления", 1450, "Измеритель", CategoryId::Instruments)
            .with_rating(4.4, 67)
            .with_image("📊"),
        Product::new(7, "Кожаный Ремень", 670, "Кожевникъ", CategoryId::Accessories)
            .with_rating(4.7, 145)
            .with_image("👔"),
        Product::new(8, "Карманные Часы", 3200, "Часовщикъ", CategoryId::Watches)
            .with_rating(4.8, 289)
            .with_image("⏰"),
    ]
}
