//! Error types for payment selection.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The requested payment mode is not one of `cash` or `credit_card`.
    #[error("Invalid payment mode given: {0}")]
    InvalidPaymentMode(String),
}
