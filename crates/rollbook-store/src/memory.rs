//! In-memory blob store for testing and ephemeral use.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlobStore;

/// An in-memory implementation of [`BlobStore`].
///
/// All data lives in a `HashMap` behind a `RwLock` and is lost when the
/// store is dropped. Suitable for unit tests and short-lived sessions.
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.blobs.read().expect("lock poisoned").is_empty()
    }

    /// Remove all keys.
    pub fn clear(&self) {
        self.blobs.write().expect("lock poisoned").clear();
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        blobs.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(blobs.remove(key).is_some())
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        let blobs = self
            .blobs
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(blobs.contains_key(key))
    }
}

impl std::fmt::Debug for MemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBlobStore")
            .field("key_count", &self.len())
            .finish()
    }
}
