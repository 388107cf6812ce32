//! Cart-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ProductId};

/// Errors returned by cart operations. A failed operation leaves the
/// cart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A quantity passed to `add` was zero or negative.
    #[error("Quantity must be a positive integer, got {0}")]
    InvalidQuantity(i64),

    /// The resulting line quantity would not fit the cart's counter.
    #[error("Quantity limit exceeded for product {0}")]
    QuantityOverflow(ProductId),

    /// Two lines share one product id.
    #[error("Duplicate cart line for product {0}")]
    DuplicateLine(ProductId),
}

impl CartError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            CartError::InvalidQuantity(_) | CartError::QuantityOverflow(_) => {
                ErrorCode::InvalidQuantity
            }
            CartError::DuplicateLine(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<CartError> for DomainError {
    fn from(err: CartError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            CartError::ProductNotFound(id)
            | CartError::QuantityOverflow(id)
            | CartError::DuplicateLine(id) => domain.with_detail("product_id", id.as_str()),
            CartError::InvalidQuantity(quantity) => {
                domain.with_detail("quantity", quantity.to_string())
            }
        }
    }
}
