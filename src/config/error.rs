//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Storage key may only contain letters, digits, '-' and '_'")]
    InvalidStorageKey,

    #[error("Default min price exceeds default max price")]
    InvalidPriceRange,

    #[error("Default prices must not be negative")]
    NegativePrice,

    #[error("Payment delay exceeds maximum allowed (60s)")]
    PaymentDelayTooLong,

    #[error("Currency must be a three-letter ISO code")]
    InvalidCurrency,

    #[error("Country must be a two-letter ISO code")]
    InvalidCountry,
}
