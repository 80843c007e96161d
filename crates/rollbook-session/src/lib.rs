//! Session facade for Rollbook.
//!
//! This crate is the single point the presentation layer goes through:
//!
//! - [`Persistence`] loads the state blob at startup (falling back to the
//!   empty default on missing or corrupt data) and writes it back after
//!   every change, best-effort
//! - [`Session`] holds the current [`State`](rollbook_state::State), applies
//!   commands through the pure transition, persists each result before
//!   publishing it to observers, and re-checks the duplicate contract so a
//!   sloppy caller cannot corrupt the store
//! - [`init_global`] / [`global`] manage the one process-wide session;
//!   touching [`global`] before initialization is a programming error and
//!   fails fast with [`SessionError::NotInitialized`]
//!
//! Persistence failures never surface to the caller: they are logged via
//! `tracing` and the in-memory state stays the source of truth for the
//! session.

pub mod error;
pub mod persistence;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use persistence::{Persistence, STATE_KEY};
pub use session::{global, init_global, Session, SharedSession};
