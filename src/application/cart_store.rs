//! CartStore - the owned, persisted shopping cart.
//!
//! Wraps a [`CartState`] together with the catalog it resolves product ids
//! against and the storage it writes through to. Every successful
//! operation writes the full line list back to storage; storage failures
//! are logged and never surface to the caller.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::domain::cart::{
    decode_cart, encode_cart, CartError, CartLine, CartState, CartStatus, CART_STORAGE_KEY,
};
use crate::domain::foundation::{Money, ProductId};
use crate::ports::{CartStorage, ProductCatalog};

/// Shopping cart bound to a catalog and a storage backend.
pub struct CartStore {
    state: CartState,
    catalog: Arc<dyn ProductCatalog>,
    storage: Arc<dyn CartStorage>,
    storage_key: String,
}

impl CartStore {
    /// Opens the cart under the default `cart` key, restoring any saved
    /// contents.
    pub fn open(catalog: Arc<dyn ProductCatalog>, storage: Arc<dyn CartStorage>) -> Self {
        Self::open_with_key(catalog, storage, CART_STORAGE_KEY)
    }

    /// Opens the cart under `storage_key`.
    ///
    /// Never fails: a missing, unreadable or corrupt payload yields an
    /// empty cart.
    pub fn open_with_key(
        catalog: Arc<dyn ProductCatalog>,
        storage: Arc<dyn CartStorage>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let state = Self::rehydrate(storage.as_ref(), &storage_key);
        Self {
            state,
            catalog,
            storage,
            storage_key,
        }
    }

    fn rehydrate(storage: &dyn CartStorage, key: &str) -> CartState {
        let payload = match storage.read(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                tracing::debug!(key, "No saved cart");
                return CartState::new();
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read saved cart, starting empty");
                return CartState::new();
            }
        };

        match decode_cart(&payload) {
            Ok(state) => {
                tracing::info!(
                    key,
                    lines = state.lines().len(),
                    items = state.item_count(),
                    "Restored saved cart"
                );
                state
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding corrupt saved cart");
                CartState::new()
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds `quantity` units of the product with `id`.
    ///
    /// An existing line for the product has its quantity increased;
    /// otherwise a new line snapshotting name, price and image is appended.
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `quantity` is zero or negative
    /// - `ProductNotFound` if the catalog has no such product
    /// - `QuantityOverflow` if the line quantity would exceed `u32::MAX`
    ///
    /// The cart is unchanged and nothing is written on error.
    pub fn add(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;

        let product = self
            .catalog
            .find_by_id(id)
            .ok_or_else(|| CartError::ProductNotFound(id.clone()))?;

        self.state.add_product(product, quantity)?;
        tracing::debug!(product_id = %id, quantity = quantity.get(), "Added to cart");

        self.persist();
        Ok(())
    }

    /// Adds a single unit of the product with `id`.
    pub fn add_one(&mut self, id: &ProductId) -> Result<(), CartError> {
        self.add(id, 1)
    }

    /// Removes the line for `id`. Returns false if there was none.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let removed = self.state.remove(id);
        self.persist();
        removed
    }

    /// Replaces the quantity of the line for `id`; zero or less removes it.
    /// Returns false if there was no such line.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let found = self.state.set_quantity(id, quantity);
        self.persist();
        found
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.state.clear();
        self.persist();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn total(&self) -> Money {
        self.state.total()
    }

    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.state.line(id)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn status(&self) -> CartStatus {
        self.state.status()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn persist(&self) {
        let payload = match encode_cart(&self.state) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(key = %self.storage_key, error = %e, "Failed to encode cart");
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.storage_key, &payload) {
            tracing::error!(key = %self.storage_key, error = %e, "Failed to save cart");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
