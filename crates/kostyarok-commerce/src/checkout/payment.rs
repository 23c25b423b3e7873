//! Payment form buffer.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields of the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentField {
    CardNumber,
    CardHolder,
    Expiry,
    Cvv,
}

impl PaymentField {
    pub const ALL: [PaymentField; 4] = [
        PaymentField::CardNumber,
        PaymentField::CardHolder,
        PaymentField::Expiry,
        PaymentField::Cvv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "card_number",
            PaymentField::CardHolder => "card_holder",
            PaymentField::Expiry => "expiry",
            PaymentField::Cvv => "cvv",
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "Номер карты",
            PaymentField::CardHolder => "Имя владельца",
            PaymentField::Expiry => "Срок действия",
            PaymentField::Cvv => "CVV",
        }
    }

    /// Input placeholder.
    pub fn placeholder(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "1234 5678 9012 3456",
            PaymentField::CardHolder => "IVAN IVANOV",
            PaymentField::Expiry => "MM/YY",
            PaymentField::Cvv => "123",
        }
    }

    /// Whether the value should be masked when shown.
    pub fn is_secret(&self) -> bool {
        matches!(self, PaymentField::Cvv)
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentField {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "card_number" | "card" | "number" => Ok(PaymentField::CardNumber),
            "card_holder" | "holder" => Ok(PaymentField::CardHolder),
            "expiry" => Ok(PaymentField::Expiry),
            "cvv" => Ok(PaymentField::Cvv),
            _ => Err(CommerceError::UnknownPaymentField(s.to_string())),
        }
    }
}

/// Free-text card details. Nothing here is validated.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentForm {
    pub card_number: String,
    pub card_holder: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentForm {
    /// Read a field.
    pub fn get(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardNumber => &self.card_number,
            PaymentField::CardHolder => &self.card_holder,
            PaymentField::Expiry => &self.expiry,
            PaymentField::Cvv => &self.cvv,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: PaymentField, value: impl Into<String>) {
        let slot = match field {
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::CardHolder => &mut self.card_holder,
            PaymentField::Expiry => &mut self.expiry,
            PaymentField::Cvv => &mut self.cvv,
        };
        *slot = value.into();
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        PaymentField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// Card data stays out of logs and debug output.
impl fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentForm")
            .field("blank", &self.is_blank())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut form = PaymentForm::default();
        assert!(form.is_blank());

        form.set(PaymentField::CardNumber, "not a number");
        form.set(PaymentField::Cvv, "12345");
        assert_eq!(form.get(PaymentField::CardNumber), "not a number");
        assert_eq!(form.cvv, "12345");
        assert!(!form.is_blank());

        form.clear();
        assert_eq!(form, PaymentForm::default());
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("card-number".parse::<PaymentField>(), Ok(PaymentField::CardNumber));
        assert_eq!("holder".parse::<PaymentField>(), Ok(PaymentField::CardHolder));
        assert_eq!("CVV".parse::<PaymentField>(), Ok(PaymentField::Cvv));
        assert!("pin".parse::<PaymentField>().is_err());
    }

    #[test]
    fn test_debug_hides_card_data() {
        let mut form = PaymentForm::default();
        form.set(PaymentField::CardNumber, "4111111111111111");
        let debug = format!("{:?}", form);
        assert!(!debug.contains("4111"));
    }
}
