//! Simulated payment gateway.
//!
//! Waits for a configurable processing delay and then accepts every
//! positive charge. Stands in for a real gateway during development and
//! demos.

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;
use crate::ports::{PaymentError, PaymentProvider, PaymentReceipt, PaymentRequest};

/// Default processing delay, matching a typical gateway round trip.
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(2000);

/// Payment provider that always succeeds after a delay.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentProvider {
    delay: Duration,
}

impl SimulatedPaymentProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Provider with no delay, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedPaymentProvider {
    fn default() -> Self {
        Self::new(DEFAULT_PAYMENT_DELAY)
    }
}

#[async_trait]
impl PaymentProvider for SimulatedPaymentProvider {
    async fn submit_payment(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        if request.amount.is_negative() || request.amount.is_zero() {
            return Err(PaymentError::invalid_amount(request.amount));
        }

        tracing::debug!(
            order_id = %request.order_id,
            amount = %request.amount,
            currency = %request.currency,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating payment processing"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(PaymentReceipt {
            transaction_id: format!("txn_sim_{}", Uuid::new_v4().simple()),
            amount: request.amount,
            currency: request.currency,
            processed_at: Timestamp::now(),
        })
    }
}
