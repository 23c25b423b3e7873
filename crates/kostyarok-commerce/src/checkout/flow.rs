//! Cart/checkout state machine.

use crate::cart::{Cart, CartTotals};
use crate::catalog::Product;
use crate::checkout::{PaymentField, PaymentForm};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Observable checkout states.
///
/// `Paid` never persists: `pay` reports it and the session is already back
/// to `Empty` when the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutState {
    /// Nothing in the cart.
    Empty,
    /// Cart has items, payment dialog closed.
    HasItems,
    /// Payment dialog open.
    CheckoutOpen,
    /// Payment just accepted.
    Paid,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Empty => "empty",
            CheckoutState::HasItems => "has_items",
            CheckoutState::CheckoutOpen => "checkout_open",
            CheckoutState::Paid => "paid",
        }
    }
}

/// Result of a simulated payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfirmation {
    /// Amount charged.
    pub total: Money,
    /// Number of units bought.
    pub item_count: u64,
    /// State reported for the payment.
    pub state: CheckoutState,
    /// User-facing confirmation text.
    pub message: String,
}

impl PaymentConfirmation {
    fn new(total: Money, item_count: u64) -> Self {
        Self {
            total,
            item_count,
            state: CheckoutState::Paid,
            message: format!(
                "Платеж на сумму {} успешно обработан! Спасибо за покупку в Костярке! ⚙️",
                total.display()
            ),
        }
    }
}

/// Cart, checkout dialog flag and payment form for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSession {
    cart: Cart,
    checkout_open: bool,
    payment: PaymentForm,
}

impl CheckoutSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, derived from the cart and the dialog flag.
    pub fn state(&self) -> CheckoutState {
        if self.checkout_open {
            CheckoutState::CheckoutOpen
        } else if self.cart.is_empty() {
            CheckoutState::Empty
        } else {
            CheckoutState::HasItems
        }
    }

    /// Add one unit of a product.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart.add(product);
    }

    /// Remove a product; absent products are ignored.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
        self.close_if_empty();
    }

    /// Set a product's quantity; zero or below removes it.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.cart.update_quantity(id, quantity);
        self.close_if_empty();
    }

    /// Sum of price times quantity.
    pub fn total_amount(&self) -> Money {
        self.cart.total()
    }

    /// Full totals breakdown.
    pub fn totals(&self) -> CartTotals {
        CartTotals::calculate(&self.cart)
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.cart.unique_item_count()
    }

    /// Open the payment dialog.
    ///
    /// Not a plain setter: with an empty cart this is a no-op and the
    /// state stays [`CheckoutState::Empty`]. The storefront only offers
    /// checkout from a non-empty cart, so the dialog can never show an
    /// empty order.
    pub fn open_checkout(&mut self) {
        if self.cart.is_empty() {
            tracing::debug!("checkout requested for empty cart");
            return;
        }
        self.checkout_open = true;
    }

    /// Dismiss the payment dialog without paying.
    pub fn close_checkout(&mut self) {
        self.checkout_open = false;
    }

    pub fn is_checkout_open(&self) -> bool {
        self.checkout_open
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn payment_form(&self) -> &PaymentForm {
        &self.payment
    }

    pub fn payment_form_mut(&mut self) -> &mut PaymentForm {
        &mut self.payment
    }

    /// Overwrite one payment form field.
    pub fn set_payment_field(&mut self, field: PaymentField, value: impl Into<String>) {
        self.payment.set(field, value);
    }

    /// Accept the payment and reset the session.
    ///
    /// No form field is inspected. The cart is emptied, the dialog closed
    /// and the form blanked whatever the prior state.
    pub fn pay(&mut self) -> PaymentConfirmation {
        let confirmation = PaymentConfirmation::new(self.total_amount(), self.item_count());
        tracing::info!(
            total = confirmation.total.amount(),
            items = confirmation.item_count,
            "payment accepted"
        );

        self.cart.clear();
        self.checkout_open = false;
        self.payment.clear();

        confirmation
    }

    fn close_if_empty(&mut self) {
        if self.cart.is_empty() {
            self.checkout_open = false;
        }
    }
}
