//! Storage Adapters
//!
//! Implementations of the CartStorage port for persisting the cart.
//!
//! ## Available Adapters
//!
//! - **FileCartStorage** - Stores each key as a JSON file on disk
//! - **InMemoryCartStorage** - Stores payloads in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileCartStorage, InMemoryCartStorage};
//!
//! // Production: file-based storage
//! let storage = FileCartStorage::new("./data");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryCartStorage::new();
//! ```

mod file_cart_storage;
mod in_memory_cart_storage;

pub use file_cart_storage::FileCartStorage;
pub use in_memory_cart_storage::InMemoryCartStorage;
