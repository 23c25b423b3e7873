//! Session state and the action reducer.
//!
//! Every user interaction is expressed as an [`Action`] and applied to the
//! single [`AppState`] of a session, one at a time, to completion.

use kostyarok_commerce::catalog::{Catalog, CategoryFilter, Product};
use kostyarok_commerce::checkout::{CheckoutSession, PaymentConfirmation, PaymentField};
use kostyarok_commerce::search::{FilterCriteria, PriceRange};
use kostyarok_commerce::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::view::View;

/// A single user interaction.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Switch to another page.
    Navigate(View),
    /// Replace the search text.
    SetSearch(String),
    /// Choose a category chip.
    SelectCategory(CategoryFilter),
    /// Move the price slider.
    SetPriceRange { min: u64, max: u64 },
    /// Move the rating slider.
    SetMinRating(f64),
    /// Restore default filter criteria.
    ResetFilters,
    /// Add one unit of a catalog product.
    AddToCart(ProductId),
    /// Drop a product from the cart.
    RemoveFromCart(ProductId),
    /// Set a cart quantity; zero or below removes.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Open the payment dialog.
    OpenCheckout,
    /// Dismiss the payment dialog.
    CloseCheckout,
    /// Type into a payment form field.
    EditPayment { field: PaymentField, value: String },
    /// Submit the payment form.
    Pay,
}

// Payment input stays out of logs; only its length is shown.
impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Navigate(view) => f.debug_tuple("Navigate").field(view).finish(),
            Action::SetSearch(search) => f.debug_tuple("SetSearch").field(search).finish(),
            Action::SelectCategory(category) => {
                f.debug_tuple("SelectCategory").field(category).finish()
            }
            Action::SetPriceRange { min, max } => f
                .debug_struct("SetPriceRange")
                .field("min", min)
                .field("max", max)
                .finish(),
            Action::SetMinRating(rating) => f.debug_tuple("SetMinRating").field(rating).finish(),
            Action::ResetFilters => f.write_str("ResetFilters"),
            Action::AddToCart(id) => f.debug_tuple("AddToCart").field(id).finish(),
            Action::RemoveFromCart(id) => f.debug_tuple("RemoveFromCart").field(id).finish(),
            Action::UpdateQuantity { id, quantity } => f
                .debug_struct("UpdateQuantity")
                .field("id", id)
                .field("quantity", quantity)
                .finish(),
            Action::OpenCheckout => f.write_str("OpenCheckout"),
            Action::CloseCheckout => f.write_str("CloseCheckout"),
            Action::EditPayment { field, value } => f
                .debug_struct("EditPayment")
                .field("field", field)
                .field("len", &value.chars().count())
                .finish_non_exhaustive(),
            Action::Pay => f.write_str("Pay"),
        }
    }
}

/// Something the user must be told about after an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Notice {
    /// Payment accepted; shown as a blocking alert.
    PaymentConfirmed(PaymentConfirmation),
    /// An action named a product that is not in the catalog.
    UnknownProduct(ProductId),
}

/// Everything one storefront session knows.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    catalog: Catalog,
    view: View,
    criteria: FilterCriteria,
    checkout: CheckoutSession,
}

impl AppState {
    /// Fresh session over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    /// Fresh session over a given catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            view: View::Home,
            criteria: FilterCriteria::default(),
            checkout: CheckoutSession::new(),
        }
    }

    /// Start with non-default filter criteria.
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Start on a given view.
    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn checkout(&self) -> &CheckoutSession {
        &self.checkout
    }

    /// Catalog products passing the current criteria.
    pub fn filtered_products(&self) -> Vec<Product> {
        self.catalog.filter(&self.criteria)
    }

    /// Apply one action to completion.
    pub fn apply(&mut self, action: Action) -> Option<Notice> {
        tracing::trace!(?action, view = %self.view, "applying action");

        match action {
            Action::Navigate(view) => self.view = view,
            Action::SetSearch(search) => self.criteria.search = search,
            Action::SelectCategory(category) => self.criteria.category = category,
            Action::SetPriceRange { min, max } => {
                self.criteria.price_range = PriceRange::new(min, max);
            }
            Action::SetMinRating(rating) => self.criteria.min_rating = rating,
            Action::ResetFilters => self.criteria = FilterCriteria::default(),
            Action::AddToCart(id) => match self.catalog.product(id) {
                Ok(product) => self.checkout.add_to_cart(product),
                Err(e) => {
                    tracing::warn!(error = %e, "add to cart ignored");
                    return Some(Notice::UnknownProduct(id));
                }
            },
            Action::RemoveFromCart(id) => self.checkout.remove_from_cart(id),
            Action::UpdateQuantity { id, quantity } => self.checkout.update_quantity(id, quantity),
            Action::OpenCheckout => self.checkout.open_checkout(),
            Action::CloseCheckout => self.checkout.close_checkout(),
            Action::EditPayment { field, value } => self.checkout.set_payment_field(field, value),
            Action::Pay => return Some(Notice::PaymentConfirmed(self.checkout.pay())),
        }

        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kostyarok_commerce::catalog::CategoryId;
    use kostyarok_commerce::checkout::CheckoutState;
    use kostyarok_commerce::Money;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_navigation() {
        let mut state = AppState::new();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.apply(Action::Navigate(View::Sellers)), None);
        assert_eq!(state.view(), View::Sellers);
    }

    #[test]
    fn test_filter_actions() {
        let mut state = AppState::new();
        state.apply(Action::SelectCategory(CategoryId::Watches.into()));
        assert_eq!(state.filtered_products().len(), 2);

        state.apply(Action::SetPriceRange { min: 0, max: 4000 });
        let names: Vec<String> = state.filtered_products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Карманные Часы"]);

        state.apply(Action::SetMinRating(4.9));
        assert!(state.filtered_products().is_empty());

        state.apply(Action::ResetFilters);
        assert_eq!(state.filtered_products().len(), 8);
    }

    #[test]
    fn test_cart_and_payment_flow() {
        let mut state = AppState::new();
        state.apply(Action::AddToCart(ProductId::new(1)));
        state.apply(Action::AddToCart(ProductId::new(2)));
        state.apply(Action::UpdateQuantity {
            id: ProductId::new(2),
            quantity: 2,
        });
        state.apply(Action::OpenCheckout);
        state.apply(Action::EditPayment {
            field: PaymentField::CardHolder,
            value: "IVAN IVANOV".into(),
        });
        assert_eq!(state.checkout().state(), CheckoutState::CheckoutOpen);

        let notice = state.apply(Action::Pay);
        match notice {
            Some(Notice::PaymentConfirmed(confirmation)) => {
                assert_eq!(confirmation.total, Money::new(6280));
            }
            other => panic!("expected payment confirmation, got {:?}", other),
        }
        assert_eq!(state.checkout().state(), CheckoutState::Empty);
        assert!(state.checkout().payment_form().is_blank());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_payment_input_never_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        let mut state = AppState::new();
        tracing::subscriber::with_default(subscriber, || {
            state.apply(Action::AddToCart(ProductId::new(1)));
            state.apply(Action::OpenCheckout);
            state.apply(Action::EditPayment {
                field: PaymentField::CardNumber,
                value: "4111111111111111".into(),
            });
            state.apply(Action::EditPayment {
                field: PaymentField::Cvv,
                value: "987".into(),
            });
            state.apply(Action::Pay);
        });

        let log = String::from_utf8_lossy(&captured.0.lock().unwrap()).into_owned();
        assert!(log.contains("EditPayment"));
        assert!(!log.contains("4111111111111111"));
        assert!(!log.contains("987"));
    }

    #[test]
    fn test_action_debug_hides_payment_value() {
        let action = Action::EditPayment {
            field: PaymentField::CardHolder,
            value: "IVAN IVANOV".into(),
        };
        let shown = format!("{:?}", action);
        assert_eq!(shown, "EditPayment { field: CardHolder, len: 11, .. }");
        assert_eq!(
            format!("{:?}", Action::SetPriceRange { min: 0, max: 500 }),
            "SetPriceRange { min: 0, max: 500 }"
        );
    }

    #[test]
    fn test_unknown_product_is_reported() {
        let mut state = AppState::new();
        let notice = state.apply(Action::AddToCart(ProductId::new(42)));
        assert_eq!(notice, Some(Notice::UnknownProduct(ProductId::new(42))));
        assert!(state.checkout().cart().is_empty());
    }
}
