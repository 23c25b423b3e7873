//! Checkout module.
//!
//! Contains the payment form buffer and the cart/checkout state machine.

mod flow;
mod payment;

pub use flow::{CheckoutSession, CheckoutState, PaymentConfirmation};
pub use payment::{PaymentField, PaymentForm};
