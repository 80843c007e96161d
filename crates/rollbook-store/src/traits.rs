use crate::error::StoreResult;

/// A string-keyed byte store.
///
/// All implementations must satisfy these invariants:
/// - A write fully replaces any previous value under the key.
/// - Reading an absent key is `Ok(None)`, never an error.
/// - The store never interprets blob contents.
/// - All I/O errors are propagated, never silently ignored.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written or was deleted.
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `data` under `key`, replacing any previous value.
    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()>;

    /// Delete the blob under `key`. Returns `true` if a value existed.
    fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Check whether a blob exists under `key`.
    ///
    /// Default implementation reads the value. Backends may override to
    /// avoid pulling the blob into memory.
    fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.read(key)?.is_some())
    }
}

impl<T: BlobStore + ?Sized> BlobStore for Box<T> {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        (**self).write(key, data)
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        (**self).exists(key)
    }
}

impl<T: BlobStore + ?Sized> BlobStore for std::sync::Arc<T> {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        (**self).write(key, data)
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        (**self).exists(key)
    }
}
