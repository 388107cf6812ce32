//! Persisted cart layout.
//!
//! The cart is stored under a single key as a JSON array of flat line
//! objects: `[{"id","name","price","quantity","image"}, ...]`. There is no
//! version field. A payload that does not match this shape exactly is
//! rejected as a whole; nothing is partially restored.

use thiserror::Error;

use super::line::CartLine;
use super::state::CartState;

/// Storage key the cart is saved under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Reasons a persisted cart payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptCart {
    #[error("Cart payload is not a valid line list: {0}")]
    Malformed(String),

    #[error("Cart line {index} is invalid: {reason}")]
    InvalidLine { index: usize, reason: String },

    #[error("Cart payload has more than one line for product {0}")]
    DuplicateLine(String),
}

/// Serializes the line list in the persisted layout.
pub fn encode_cart(cart: &CartState) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart.lines())
}

/// Parses a persisted payload back into a cart.
///
/// # Errors
///
/// - `Malformed` for invalid JSON, missing fields, wrong types, unknown
///   fields, or a quantity below 1
/// - `InvalidLine` for a blank id or a negative price
/// - `DuplicateLine` if two lines share a product id
pub fn decode_cart(payload: &str) -> Result<CartState, CorruptCart> {
    let lines: Vec<CartLine> =
        serde_json::from_str(payload).map_err(|e| CorruptCart::Malformed(e.to_string()))?;

    for (index, line) in lines.iter().enumerate() {
        if line.id().as_str().trim().is_empty() {
            return Err(CorruptCart::InvalidLine {
                index,
                reason: "empty id".to_string(),
            });
        }
        if line.price().is_negative() {
            return Err(CorruptCart::InvalidLine {
                index,
                reason: format!("negative price {}", line.price()),
            });
        }
    }

    CartState::from_lines(lines).map_err(|e| match e {
        super::errors::CartError::DuplicateLine(id) => CorruptCart::DuplicateLine(id.to_string()),
        other => CorruptCart::Malformed(other.to_string()),
    })
}
