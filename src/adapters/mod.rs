//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Cart persistence (file, in-memory)
//! - `catalog` - Product catalog (in-memory, seeded)
//! - `payment` - Payment gateways (simulated, mock)

pub mod catalog;
pub mod payment;
pub mod storage;

pub use catalog::InMemoryCatalog;
pub use payment::{MockPaymentProvider, SimulatedPaymentProvider, DEFAULT_PAYMENT_DELAY};
pub use storage::{FileCartStorage, InMemoryCartStorage};
