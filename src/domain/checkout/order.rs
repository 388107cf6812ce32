//! Order confirmation produced by a successful checkout.

use serde::Serialize;

use crate::domain::cart::{CartLine, CartState};
use crate::domain::foundation::{Money, OrderId, Timestamp};

/// Snapshot of what was bought, taken before the cart is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    order_id: OrderId,
    lines: Vec<CartLine>,
    total: Money,
    item_count: u64,
    email: String,
    customer_name: String,
    transaction_id: String,
    placed_at: Timestamp,
}

impl OrderConfirmation {
    pub fn new(
        cart: &CartState,
        email: impl Into<String>,
        customer_name: impl Into<String>,
        transaction_id: impl Into<String>,
    ) -> Self {
        Self {
            order_id: OrderId::new(),
            lines: cart.lines().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
            email: email.into(),
            customer_name: customer_name.into(),
            transaction_id: transaction_id.into(),
            placed_at: Timestamp::now(),
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }
}
