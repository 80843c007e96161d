//! Key-value blob storage for Rollbook.
//!
//! Rollbook persists its entire state as one blob under a fixed key. This
//! crate provides the storage boundary that blob goes through: a small
//! [`BlobStore`] trait plus backends.
//!
//! # Storage Backends
//!
//! - [`MemoryBlobStore`] — `HashMap`-based store for tests and embedding
//! - [`FileBlobStore`] — one file per key under a directory, the local
//!   equivalent of a browser's `localStorage`
//!
//! # Design Rules
//!
//! 1. The store never interprets blob contents — it is a pure key-value
//!    byte store.
//! 2. Reads of absent keys return `Ok(None)`, never an error.
//! 3. All I/O errors are propagated; swallowing them is the persistence
//!    layer's decision, not the store's.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::BlobStore;
