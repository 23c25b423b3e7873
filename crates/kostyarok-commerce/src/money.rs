//! Money type for representing prices and totals.
//!
//! The storefront trades in whole roubles, so amounts are plain unsigned
//! integers. Arithmetic saturates at `u64::MAX` instead of overflowing,
//! which keeps every cart operation total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency sign appended to displayed amounts.
pub const ROUBLE_SIGN: &str = "\u{20bd}";

/// A non-negative amount of roubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero roubles.
    pub const ZERO: Money = Money(0);

    /// Create a Money value from whole roubles.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Amount in roubles.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Format as a display string (e.g., "4500₽").
    pub fn display(&self) -> String {
        format!("{}{}", self.0, ROUBLE_SIGN)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
