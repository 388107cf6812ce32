//! Cart storage port: a string key/value store the cart persists into.
//!
//! Cart operations are synchronous, so this port is too. Adapters store
//! the encoded payload verbatim and never interpret it.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during cart storage operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartStorageError {
    /// The backing store could not be read or written.
    #[error("IO error: {0}")]
    Io(String),

    /// The key cannot be mapped onto the backing store.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The backing store refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value storage for the persisted cart.
pub trait CartStorage: Send + Sync {
    /// Reads the payload under `key`. `Ok(None)` means nothing was stored.
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError>;

    /// Replaces the payload under `key`.
    fn write(&self, key: &str, payload: &str) -> Result<(), CartStorageError>;
}

impl From<CartStorageError> for DomainError {
    fn from(err: CartStorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_storage_code() {
        let domain: DomainError = CartStorageError::Io("disk full".to_string()).into();
        assert_eq!(domain.code, ErrorCode::StorageError);
        assert_eq!(domain.message, "IO error: disk full");
    }
}
