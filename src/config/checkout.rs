//! Checkout configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest simulated payment delay accepted.
const MAX_PAYMENT_DELAY_MS: u64 = 60_000;

/// Checkout and payment settings
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated payment processing delay in milliseconds
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,

    /// ISO 4217 currency code charged in
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Country preselected on the checkout form
    #[serde(default = "default_country")]
    pub default_country: String,
}

impl CheckoutConfig {
    /// Simulated payment delay as a duration
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    /// Validate checkout configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.payment_delay_ms > MAX_PAYMENT_DELAY_MS {
            return Err(ValidationError::PaymentDelayTooLong);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency);
        }
        if self.default_country.len() != 2
            || !self.default_country.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ValidationError::InvalidCountry);
        }
        Ok(())
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            payment_delay_ms: default_payment_delay_ms(),
            currency: default_currency(),
            default_country: default_country(),
        }
    }
}

fn default_payment_delay_ms() -> u64 {
    2000
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_country() -> String {
    crate::domain::checkout::DEFAULT_COUNTRY.to_string()
}
