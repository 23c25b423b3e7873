//! Catalog filtering and checkout behaviour across the public API.

use kostyarok_commerce::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn category_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        Just(CategoryFilter::Only(CategoryId::Watches)),
        Just(CategoryFilter::Only(CategoryId::Parts)),
        Just(CategoryFilter::Only(CategoryId::Instruments)),
        Just(CategoryFilter::Only(CategoryId::Accessories)),
        Just(CategoryFilter::Only(CategoryId::Engines)),
    ]
}

fn search_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("паровой".to_string()),
        Just("ЧАСЫ".to_string()),
        Just("ъ".to_string()),
        Just("нет такого".to_string()),
        "[а-яА-Я]{0,3}",
    ]
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        search_text(),
        category_filter(),
        0u64..12_000,
        0u64..12_000,
        0.0f64..=5.0,
    )
        .prop_map(|(search, category, min, max, rating)| {
            FilterCriteria::new()
                .with_search(search)
                .with_category(category)
                .with_price_range(min, max)
                .with_min_rating(rating)
        })
}

fn product_id() -> impl Strategy<Value = u32> {
    1u32..=8
}

proptest! {
    #[test]
    fn prop_filter_is_ordered_subsequence(criteria in criteria()) {
        let catalog = Catalog::seeded();
        let filtered = catalog.filter(&criteria);

        let mut source = catalog.products().iter();
        for product in &filtered {
            prop_assert!(source.any(|p| p == product));
        }
    }

    #[test]
    fn prop_filter_results_satisfy_criteria(criteria in criteria()) {
        let catalog = Catalog::seeded();
        let filtered = catalog.filter(&criteria);
        let expected = catalog.products().iter().filter(|p| criteria.matches(p)).count();

        prop_assert_eq!(filtered.len(), expected);
        for product in &filtered {
            prop_assert!(criteria.price_range.contains(product.price));
            prop_assert!(product.rating >= criteria.min_rating);
            prop_assert!(criteria.category.admits(product.category));
        }
    }

    #[test]
    fn prop_pay_always_resets(
        adds in prop::collection::vec(product_id(), 0..12),
        open in any::<bool>(),
        card in ".{0,20}",
    ) {
        let catalog = Catalog::seeded();
        let mut session = CheckoutSession::new();
        for id in &adds {
            session.add_to_cart(catalog.get(ProductId::new(*id)).unwrap());
        }
        if open {
            session.open_checkout();
        }
        session.set_payment_field(PaymentField::CardNumber, card);
        let expected_total = session.total_amount();

        let confirmation = session.pay();

        prop_assert_eq!(confirmation.total, expected_total);
        prop_assert!(session.cart().is_empty());
        prop_assert!(session.payment_form().is_blank());
        prop_assert!(!session.is_checkout_open());
        prop_assert_eq!(session.state(), CheckoutState::Empty);
    }

    #[test]
    fn prop_total_matches_line_sum(
        ops in prop::collection::vec((product_id(), -3i64..6), 0..20),
    ) {
        let catalog = Catalog::seeded();
        let mut session = CheckoutSession::new();
        for (id, qty) in ops {
            let id = ProductId::new(id);
            session.add_to_cart(catalog.get(id).unwrap());
            session.update_quantity(id, qty);
        }

        let by_hand: u64 = session
            .cart()
            .items()
            .map(|i| i.price.amount() * u64::from(i.quantity))
            .sum();
        prop_assert_eq!(session.total_amount().amount(), by_hand);
        prop_assert!(session.cart().items().all(|i| i.quantity >= 1));
    }
}

#[test]
fn test_default_criteria_return_full_catalog() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.filter(&FilterCriteria::default()), catalog.products().to_vec());
}

#[test]
fn test_add_twice_yields_quantity_two() {
    let catalog = Catalog::seeded();
    let compass = catalog.get(ProductId::new(3)).unwrap();
    let mut session = CheckoutSession::new();
    session.add_to_cart(compass);
    session.add_to_cart(compass);

    assert_eq!(session.unique_item_count(), 1);
    assert_eq!(session.cart().get(compass.id).map(|i| i.quantity), Some(2));
}

#[test]
fn test_zero_and_negative_quantity_remove() {
    let catalog = Catalog::seeded();
    let mut session = CheckoutSession::new();
    session.add_to_cart(catalog.get(ProductId::new(1)).unwrap());
    session.add_to_cart(catalog.get(ProductId::new(2)).unwrap());

    session.update_quantity(ProductId::new(1), 0);
    session.update_quantity(ProductId::new(2), -5);
    assert!(session.cart().is_empty());
}

#[test]
fn test_total_for_two_products() {
    let catalog = Catalog::seeded();
    let mut session = CheckoutSession::new();
    let chronometer = catalog.get(ProductId::new(1)).unwrap();
    let gear = catalog.get(ProductId::new(2)).unwrap();
    assert_eq!(chronometer.price, Money::new(4500));
    assert_eq!(gear.price, Money::new(890));

    session.add_to_cart(chronometer);
    session.add_to_cart(gear);
    session.add_to_cart(gear);
    assert_eq!(session.total_amount(), Money::new(6280));
}

#[test]
fn test_chronometer_scenario() {
    let catalog = Catalog::seeded();
    let criteria = FilterCriteria::new()
        .with_search("хронометр")
        .with_category(CategoryFilter::All)
        .with_price_range(0, 10_000)
        .with_min_rating(0.0);

    let found = catalog.filter(&criteria);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Паровой Хронометр");
    assert_eq!(found[0].rating, 4.8);
    assert_eq!(found[0].category, CategoryId::Watches);

    let stricter = criteria.with_min_rating(4.85);
    assert!(catalog.filter(&stricter).is_empty());
}
