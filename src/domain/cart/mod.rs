//! Cart domain module.
//!
//! The cart state machine (lines plus derived total and item count) and
//! the persisted layout it round-trips through.

mod errors;
mod line;
mod snapshot;
mod state;

pub use errors::CartError;
pub use line::CartLine;
pub use snapshot::{decode_cart, encode_cart, CorruptCart, CART_STORAGE_KEY};
pub use state::{CartState, CartStatus};
