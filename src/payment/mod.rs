//! # Payment
//!
//! Payment is a strategy picked per order. [`select_processor`] turns the mode a
//! customer asked for into a [`PaymentProcessor`]; the order actor charges the
//! order total through it during checkout.
//!
//! Neither processor talks to a gateway. Both log the charge and report success.
//!
//! ```rust
//! use food_delivery::payment::{select_processor, PaymentError, PaymentMode};
//!
//! let cash = select_processor("cash").unwrap();
//! assert_eq!(cash.mode(), PaymentMode::Cash);
//! assert!(cash.charge(30.0));
//!
//! assert!(matches!(
//!     select_processor("bogus"),
//!     Err(PaymentError::InvalidPaymentMode(_))
//! ));
//! ```

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    CreditCard,
}

impl FromStr for PaymentMode {
    type Err = PaymentError;

    /// Case-insensitive: `cash` or `credit_card`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "credit_card" => Ok(PaymentMode::CreditCard),
            _ => Err(PaymentError::InvalidPaymentMode(s.to_string())),
        }
    }
}

impl Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Cash => f.write_str("CASH"),
            PaymentMode::CreditCard => f.write_str("CARD"),
        }
    }
}

/// Settles an amount and reports whether it went through.
pub trait PaymentProcessor: Send + Sync {
    fn mode(&self) -> PaymentMode;

    fn charge(&self, amount: f64) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CashPayment;

impl PaymentProcessor for CashPayment {
    fn mode(&self) -> PaymentMode {
        PaymentMode::Cash
    }

    fn charge(&self, amount: f64) -> bool {
        info!(amount, "Paying via cash");
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentProcessor for CreditCardPayment {
    fn mode(&self) -> PaymentMode {
        PaymentMode::CreditCard
    }

    fn charge(&self, amount: f64) -> bool {
        info!(amount, "Paying via credit card");
        true
    }
}

/// The processor for an already parsed mode.
pub fn processor_for(mode: PaymentMode) -> Box<dyn PaymentProcessor> {
    match mode {
        PaymentMode::Cash => Box::new(CashPayment),
        PaymentMode::CreditCard => Box::new(CreditCardPayment),
    }
}

/// Parses `mode` and returns its processor.
pub fn select_processor(mode: &str) -> Result<Box<dyn PaymentProcessor>, PaymentError> {
    Ok(processor_for(mode.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!("CASH".parse::<PaymentMode>(), Ok(PaymentMode::Cash));
        assert_eq!("Credit_Card".parse::<PaymentMode>(), Ok(PaymentMode::CreditCard));
    }

    #[test]
    fn credit_card_processor_always_succeeds() {
        let card = select_processor("credit_card").unwrap();
        assert_eq!(card.mode(), PaymentMode::CreditCard);
        assert!(card.charge(0.0));
        assert!(card.charge(1250.75));
    }

    #[test]
    fn unknown_mode_names_the_input() {
        let err = select_processor("upi").err().unwrap();
        assert_eq!(err, PaymentError::InvalidPaymentMode("upi".to_string()));
    }
}
