//! Catalog Adapters
//!
//! - **InMemoryCatalog** - Product list held in memory, seeded by default

mod in_memory_catalog;

pub use in_memory_catalog::InMemoryCatalog;
