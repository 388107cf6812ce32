//! CheckoutService - validates the checkout form, charges the cart total
//! and clears the cart once payment succeeds.

use std::sync::Arc;

use crate::application::CartStore;
use crate::domain::checkout::{CheckoutError, CheckoutForm, OrderConfirmation};
use crate::domain::foundation::OrderId;
use crate::ports::{PaymentProvider, PaymentRequest};

/// Places orders against a cart.
pub struct CheckoutService {
    payment_provider: Arc<dyn PaymentProvider>,
    currency: String,
}

impl CheckoutService {
    pub fn new(payment_provider: Arc<dyn PaymentProvider>, currency: impl Into<String>) -> Self {
        Self {
            payment_provider,
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Places an order for everything in `cart`.
    ///
    /// On success the cart is cleared and the confirmation describes what
    /// was bought. On any error the cart is left exactly as it was, so the
    /// shopper can fix the form or retry.
    ///
    /// # Errors
    ///
    /// - `Validation` with every failing field if the form is invalid
    /// - `EmptyCart` if there is nothing to buy
    /// - `PaymentFailed` if the provider rejects the charge
    pub async fn place_order(
        &self,
        cart: &mut CartStore,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, CheckoutError> {
        // 1. Validate the form
        form.validate()?;

        // 2. Refuse an empty cart
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // 3. Submit payment for the cart total
        let order_id = OrderId::new();
        let request = PaymentRequest {
            order_id,
            amount: cart.total(),
            currency: self.currency.clone(),
            email: form.email().to_string(),
            customer_name: form.customer_name(),
            card_last4: form.card_last4(),
            idempotency_key: format!("order-{}", order_id),
        };

        tracing::info!(
            order_id = %order_id,
            amount = %request.amount,
            items = cart.item_count(),
            "Submitting payment"
        );

        let receipt = match self.payment_provider.submit_payment(request).await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Payment failed");
                return Err(CheckoutError::PaymentFailed { reason: e.message });
            }
        };

        // 4. Snapshot the order, then clear the cart
        let confirmation = OrderConfirmation::new(
            cart.state(),
            form.email(),
            form.customer_name(),
            receipt.transaction_id,
        );
        cart.clear();

        tracing::info!(
            order_id = %confirmation.order_id(),
            transaction_id = %confirmation.transaction_id(),
            "Order placed"
        );

        Ok(confirmation)
    }
}
