//! Payment provider port for order payment processing.
//!
//! Defines the contract checkout uses to charge the shopper. The shipped
//! implementation is a simulated gateway; a real one would wrap an
//! external API behind the same trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, OrderId, Timestamp};

/// Port for payment provider integrations.
///
/// Implementations must treat `idempotency_key` as the identity of a
/// charge so that a retried submission is not billed twice.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Charge the amount described by `request`.
    ///
    /// Returns a receipt carrying the provider's transaction id.
    async fn submit_payment(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// Request to charge a shopper for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Order the charge belongs to.
    pub order_id: OrderId,

    /// Amount to charge.
    pub amount: Money,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Customer email for the receipt.
    pub email: String,

    /// Cardholder or customer name.
    pub customer_name: String,

    /// Last four card digits, for display on the receipt.
    pub card_last4: Option<String>,

    /// Idempotency key for safe retries.
    pub idempotency_key: String,
}

/// Successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Provider's transaction id.
    pub transaction_id: String,

    /// Amount actually charged.
    pub amount: Money,

    pub currency: String,

    /// When the provider accepted the charge.
    pub processed_at: Timestamp,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a card declined error.
    pub fn card_declined(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::CardDeclined, message)
    }

    /// Create an invalid amount error.
    pub fn invalid_amount(amount: Money) -> Self {
        Self::new(
            PaymentErrorCode::InvalidAmount,
            format!("Cannot charge {}", amount),
        )
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentErrorCode {
    /// Card was declined.
    CardDeclined,

    /// Amount is zero or negative.
    InvalidAmount,
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::CardDeclined => "card_declined",
            PaymentErrorCode::InvalidAmount => "invalid_amount",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_includes_code_and_message() {
        let err = PaymentError::card_declined("Do not honor");
        assert_eq!(err.to_string(), "card_declined: Do not honor");
    }

    #[test]
    fn invalid_amount_names_the_amount() {
        let err = PaymentError::invalid_amount(Money::new(dec!(-5)));
        assert_eq!(err.code, PaymentErrorCode::InvalidAmount);
        assert_eq!(err.to_string(), "invalid_amount: Cannot charge -$5.00");
    }
}
