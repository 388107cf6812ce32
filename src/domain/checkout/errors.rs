//! Checkout error types.

use thiserror::Error;

use super::form::FieldErrors;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Message shown to the shopper whenever payment does not go through.
pub const PAYMENT_FAILED_MESSAGE: &str = "Payment failed. Please try again.";

/// Errors returned when placing an order. The cart is left untouched in
/// every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// One or more form fields failed validation.
    #[error("Checkout form is invalid: {0}")]
    Validation(FieldErrors),

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The payment provider declined or could not be reached. `reason`
    /// carries the provider's message for logs; `Display` shows only the
    /// general message.
    #[error("{}", PAYMENT_FAILED_MESSAGE)]
    PaymentFailed { reason: String },
}

impl CheckoutError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::Validation(_) => ErrorCode::ValidationFailed,
            CheckoutError::EmptyCart => ErrorCode::EmptyCart,
            CheckoutError::PaymentFailed { .. } => ErrorCode::PaymentFailed,
        }
    }

    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CheckoutError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for CheckoutError {
    fn from(errors: FieldErrors) -> Self {
        CheckoutError::Validation(errors)
    }
}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        let mut domain = DomainError::new(err.code(), err.to_string());
        if let CheckoutError::Validation(errors) = &err {
            for error in errors.iter() {
                domain = domain.with_detail(error.field.key(), error.message.clone());
            }
        }
        domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::CheckoutField;

    #[test]
    fn payment_failed_shows_general_message_only() {
        let err = CheckoutError::PaymentFailed {
            reason: "card_declined".to_string(),
        };
        assert_eq!(err.to_string(), "Payment failed. Please try again.");
        assert_eq!(err.code(), ErrorCode::PaymentFailed);
    }

    #[test]
    fn validation_errors_become_domain_details_keyed_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert(CheckoutField::ZipCode, "ZIP code is required");

        let domain: DomainError = CheckoutError::from(errors).into();

        assert_eq!(domain.code, ErrorCode::ValidationFailed);
        assert_eq!(
            domain.details.get("zipCode").map(String::as_str),
            Some("ZIP code is required")
        );
    }

    #[test]
    fn empty_cart_has_its_own_code() {
        assert_eq!(CheckoutError::EmptyCart.code(), ErrorCode::EmptyCart);
        assert!(CheckoutError::EmptyCart.field_errors().is_none());
    }
}
