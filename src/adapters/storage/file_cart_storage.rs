//! File-based Cart Storage Adapter
//!
//! Stores each key as a JSON file under a base directory, so the cart
//! survives process restarts the way browser local storage survives a
//! page reload.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{CartStorage, CartStorageError};

/// File-based key/value storage for the cart
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    base_path: PathBuf,
}

impl FileCartStorage {
    /// Create a new file storage rooted at `base_path`
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileCartStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path a key is stored at
    fn key_path(&self, key: &str) -> Result<PathBuf, CartStorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CartStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl CartStorage for FileCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CartStorageError::Io(e.to_string())),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CartStorageError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_path).map_err(|e| CartStorageError::Io(e.to_string()))?;

        // Write beside the target then rename, so a crash never leaves a
        // half-written payload behind.
        let staging = path.with_extension("json.tmp");
        let result = fs::write(&staging, payload).and_then(|()| fs::rename(&staging, &path));
        if let Err(e) = result {
            // Best effort; the write error is what the caller needs.
            let _ = fs::remove_file(&staging);
            return Err(CartStorageError::Io(e.to_string()));
        }

        Ok(())
    }
}
