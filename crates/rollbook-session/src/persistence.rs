//! Best-effort persistence of the state blob.
//!
//! The whole state travels as one JSON document under a fixed key. Loading
//! tolerates anything: a missing key or an unparsable blob yields the empty
//! default (with a warning), and a partially-shaped blob is merged over the
//! defaults field by field at the top level (`State` carries
//! `#[serde(default)]` for exactly this). Saving swallows and logs every
//! failure — durability is desirable, but the in-memory state remains the
//! source of truth for the running session either way.

use tracing::{debug, warn};

use rollbook_state::State;
use rollbook_store::BlobStore;

/// The fixed storage key the state blob lives under.
pub const STATE_KEY: &str = "rollbook:v1";

/// Load/save adapter between a [`State`] and a [`BlobStore`] key.
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> Persistence<S> {
    /// Bind to `store` under the default [`STATE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, STATE_KEY)
    }

    /// Bind to `store` under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read and deserialize the state, falling back to the default.
    ///
    /// Never fails: a read error or corrupt blob logs a warning and returns
    /// `State::default()`.
    pub fn load(&self) -> State {
        let bytes = match self.store.read(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(key = %self.key, "no persisted state, starting empty");
                return State::default();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read persisted state");
                return State::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(state) => {
                debug!(key = %self.key, bytes = bytes.len(), "loaded persisted state");
                state
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "persisted state is corrupt, starting empty");
                State::default()
            }
        }
    }

    /// Serialize and write the state, best-effort.
    ///
    /// Failures are logged and swallowed; callers never see them.
    pub fn save(&self, state: &State) {
        let bytes = match serde_json::to_vec(state) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize state");
                return;
            }
        };
        if let Err(e) = self.store.write(&self.key, &bytes) {
            warn!(key = %self.key, error = %e, "failed to persist state");
        }
    }

    /// The underlying blob store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The key the blob lives under.
    pub fn key(&self) -> &str {
        &self.key
    }
}
