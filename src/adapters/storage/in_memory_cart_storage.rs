//! In-Memory Cart Storage Adapter
//!
//! Keeps payloads in a shared map. Useful for testing and development;
//! clones share the same map, so a test can hold one handle while the
//! cart store owns another.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::ports::{CartStorage, CartStorageError};

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    fail_writes: bool,
    write_count: usize,
}

/// In-memory key/value storage for the cart
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStorage {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryCartStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-populated with one entry
    pub fn with_entry(key: &str, payload: &str) -> Self {
        let storage = Self::new();
        storage.inner_mut().entries.insert(key.to_string(), payload.to_string());
        storage
    }

    /// Make every subsequent write fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner_mut().fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.inner_ref().write_count
    }

    /// Stored payload for `key`, bypassing the port
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner_ref().entries.get(key).cloned()
    }

    fn inner_ref(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn inner_mut(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStorage for InMemoryCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        Ok(self.inner_ref().entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CartStorageError> {
        let mut inner = self.inner_mut();
        if inner.fail_writes {
            return Err(CartStorageError::Unavailable("quota exceeded".to_string()));
        }
        inner.entries.insert(key.to_string(), payload.to_string());
        inner.write_count += 1;
        Ok(())
    }
}
