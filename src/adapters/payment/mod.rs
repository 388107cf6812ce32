//! Payment Adapters
//!
//! - **SimulatedPaymentProvider** - Delays, then accepts every positive charge
//! - **MockPaymentProvider** - Error injection and call tracking for tests

mod mock_payment_provider;
mod simulated_payment_provider;

pub use mock_payment_provider::MockPaymentProvider;
pub use simulated_payment_provider::{SimulatedPaymentProvider, DEFAULT_PAYMENT_DELAY};
