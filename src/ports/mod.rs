//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CartStorage` - Key/value store the cart persists into (synchronous)
//! - `ProductCatalog` - Read access to products and categories
//! - `PaymentProvider` - Charges the shopper at checkout (async)

mod cart_storage;
mod payment_provider;
mod product_catalog;

pub use cart_storage::{CartStorage, CartStorageError};
pub use payment_provider::{
    PaymentError, PaymentErrorCode, PaymentProvider, PaymentReceipt, PaymentRequest,
};
pub use product_catalog::ProductCatalog;
