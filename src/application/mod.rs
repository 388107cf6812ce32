//! Application layer - Stores, Queries, and Services.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Cart commands are synchronous methods on an owned [`CartStore`]; the
//! listing query is a pure pass over the catalog; checkout is the only
//! async flow.

mod cart_store;
mod checkout;
mod list_products;

pub use cart_store::CartStore;
pub use checkout::CheckoutService;
pub use list_products::ListProductsHandler;
