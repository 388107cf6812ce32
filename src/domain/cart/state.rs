//! Cart state: the ordered line list and its derived totals.
//!
//! Total and item count are computed from `lines` on every read, so they
//! cannot drift from the list.

use serde::Serialize;
use std::num::NonZeroU32;

use super::errors::CartError;
use super::line::CartLine;
use crate::domain::catalog::Product;
use crate::domain::foundation::{Money, ProductId};

/// Whether the cart holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartStatus {
    Empty,
    NonEmpty,
}

/// Shopping cart contents in insertion order.
///
/// # Invariants
///
/// - at most one line per product id
/// - every line quantity is at least 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from existing lines, rejecting duplicate product ids.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CartError> {
        for (i, line) in lines.iter().enumerate() {
            if lines[..i].iter().any(|other| other.id() == line.id()) {
                return Err(CartError::DuplicateLine(line.id().clone()));
            }
        }
        Ok(Self { lines })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Σ price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Σ quantity over all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn status(&self) -> CartStatus {
        if self.lines.is_empty() {
            CartStatus::Empty
        } else {
            CartStatus::NonEmpty
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds `quantity` of `product`, merging into an existing line.
    ///
    /// An existing line keeps its original name/price/image snapshot.
    ///
    /// # Errors
    ///
    /// - `QuantityOverflow` if the merged quantity does not fit in `u32`
    pub fn add_product(&mut self, product: &Product, quantity: NonZeroU32) -> Result<(), CartError> {
        match self.lines.iter_mut().find(|line| line.id() == product.id()) {
            Some(line) => {
                let merged = line
                    .quantity()
                    .checked_add(quantity.get())
                    .and_then(NonZeroU32::new)
                    .ok_or_else(|| CartError::QuantityOverflow(product.id().clone()))?;
                line.set_quantity(merged);
            }
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
        Ok(())
    }

    /// Removes the line for `id`. Returns false if there was none.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Replaces the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. Quantities above
    /// `u32::MAX` saturate. Returns false if no line matched.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        let Some(quantity) = NonZeroU32::new(clamped) else {
            return self.remove(id);
        };

        match self.lines.iter_mut().find(|line| line.id() == id) {
            Some(line) => {
                line.set_quantity(quantity);
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
