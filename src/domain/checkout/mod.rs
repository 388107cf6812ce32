//! Checkout domain module.
//!
//! The checkout form with its normalisation and validation rules, the
//! errors an order attempt can end in, and the confirmation it yields.

mod errors;
mod form;
mod order;

pub use errors::{CheckoutError, PAYMENT_FAILED_MESSAGE};
pub use form::{
    format_card_number, format_expiry_date, CheckoutField, CheckoutForm, FieldError, FieldErrors,
    DEFAULT_COUNTRY,
};
pub use order::OrderConfirmation;
