//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Error injection (one-shot or persistent)
//! - Call tracking
//! - Fixed transaction ids

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::Timestamp;
use crate::ports::{PaymentError, PaymentProvider, PaymentReceipt, PaymentRequest};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
///
/// // Inject errors
/// mock.set_error(PaymentError::card_declined("Test decline"));
///
/// // Use in tests
/// let result = mock.submit_payment(request).await;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Error returned on every call until cleared.
    persistent_error: Option<PaymentError>,

    /// Transaction id to hand out instead of a generated one.
    transaction_id: Option<String>,

    /// Track requests for assertions.
    call_log: Vec<PaymentRequest>,
}

impl MockPaymentProvider {
    /// Create a new mock provider that accepts every payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that declines every payment.
    pub fn declining() -> Self {
        let mock = Self::new();
        mock.state().persistent_error = Some(PaymentError::card_declined("Card declined"));
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set an error to return on the next call only.
    pub fn set_error(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    /// Set an error to return on every call until cleared.
    pub fn set_persistent_error(&self, error: PaymentError) {
        self.state().persistent_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.persistent_error = None;
    }

    /// Use a fixed transaction id for successful payments.
    pub fn set_transaction_id(&self, transaction_id: impl Into<String>) {
        self.state().transaction_id = Some(transaction_id.into());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded requests.
    pub fn calls(&self) -> Vec<PaymentRequest> {
        self.state().call_log.clone()
    }

    /// Get count of payment submissions.
    pub fn call_count(&self) -> usize {
        self.state().call_log.len()
    }

    /// Check if any payment was submitted.
    pub fn was_called(&self) -> bool {
        !self.state().call_log.is_empty()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.state().call_log.clear();
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn submit_payment(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        let mut state = self.state();
        state.call_log.push(request.clone());

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }
        if let Some(error) = &state.persistent_error {
            return Err(error.clone());
        }

        let transaction_id = state
            .transaction_id
            .clone()
            .unwrap_or_else(|| format!("txn_mock_{}", state.call_log.len()));

        Ok(PaymentReceipt {
            transaction_id,
            amount: request.amount,
            currency: request.currency,
            processed_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, OrderId};
    use crate::ports::PaymentErrorCode;
    use rust_decimal_macros::dec;

    fn request() -> PaymentRequest {
        PaymentRequest {
            order_id: OrderId::new(),
            amount: Money::new(dec!(29.99)),
            currency: "USD".to_string(),
            email: "test@example.com".to_string(),
            customer_name: "Test".to_string(),
            card_last4: None,
            idempotency_key: "idem-1".to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Basic Operation Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn submit_payment_returns_mock_receipt() {
        let mock = MockPaymentProvider::new();

        let receipt = mock.submit_payment(request()).await.unwrap();

        assert_eq!(receipt.transaction_id, "txn_mock_1");
        assert_eq!(receipt.amount, Money::new(dec!(29.99)));
    }

    #[tokio::test]
    async fn set_transaction_id_returns_configured() {
        let mock = MockPaymentProvider::new();
        mock.set_transaction_id("txn_fixed");

        let receipt = mock.submit_payment(request()).await.unwrap();

        assert_eq!(receipt.transaction_id, "txn_fixed");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Injection Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn set_error_fails_only_next_call() {
        let mock = MockPaymentProvider::new();
        mock.set_error(PaymentError::card_declined("Test decline"));

        let first = mock.submit_payment(request()).await;
        let second = mock.submit_payment(request()).await;

        assert_eq!(first.unwrap_err().code, PaymentErrorCode::CardDeclined);
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn declining_mock_fails_until_cleared() {
        let mock = MockPaymentProvider::declining();

        assert!(mock.submit_payment(request()).await.is_err());
        assert!(mock.submit_payment(request()).await.is_err());

        mock.clear_errors();
        assert!(mock.submit_payment(request()).await.is_ok());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn tracks_requests_including_failures() {
        let mock = MockPaymentProvider::declining();
        assert!(!mock.was_called());

        let _ = mock.submit_payment(request()).await;

        assert!(mock.was_called());
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0].idempotency_key, "idem-1");
    }

    #[tokio::test]
    async fn clear_calls_resets_log() {
        let mock = MockPaymentProvider::new();
        mock.submit_payment(request()).await.unwrap();

        mock.clear_calls();

        assert_eq!(mock.call_count(), 0);
    }
}
