//! File-backed blob store.
//!
//! Each key maps to one file under a base directory, making this the local
//! filesystem equivalent of a browser's `localStorage`. Keys may contain
//! characters that are not valid in file names (the state key contains a
//! `:`), so key bytes outside `[A-Za-z0-9._-]` are percent-encoded when
//! forming the file name.

use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;
use crate::traits::BlobStore;

/// A [`BlobStore`] that keeps one file per key under a base directory.
///
/// Writes go through a temporary file in the same directory followed by a
/// rename, so a crash mid-write leaves the previous value intact.
#[derive(Debug)]
pub struct FileBlobStore {
    base: PathBuf,
}

impl FileBlobStore {
    /// Open a store rooted at `base`, creating the directory if needed.
    pub fn open(base: impl Into<PathBuf>) -> StoreResult<Self> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// The directory blobs are stored under.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(encode_key(key))
    }
}

/// Encode a key as a safe file name, percent-encoding everything outside
/// `[A-Za-z0-9._-]`.
fn encode_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                name.push(byte as char);
            }
            _ => {
                let _ = write!(name, "%{byte:02X}");
            }
        }
    }
    name
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;
        debug!(key, bytes = data.len(), "wrote blob");
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                debug!(key, "deleted blob");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.path_for(key).exists())
    }
}
