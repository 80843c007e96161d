//! Relational state for Rollbook.
//!
//! This crate is the core of the system: an immutable [`State`] snapshot
//! holding the four record collections, a [`Command`] enum covering every
//! mutation, and the pure transition [`State::apply`] that produces the next
//! snapshot while keeping referential integrity through cascading deletes.
//!
//! # Contract
//!
//! `apply` trusts its caller on uniqueness: the duplicate queries
//! ([`State::is_duplicate_course_type`], [`State::is_duplicate_course`],
//! [`State::is_duplicate_offering`]) must be consulted before dispatching an
//! add or update of a name or offering pair. A command dispatched without
//! that check will create duplicate rows. The session facade in
//! `rollbook-session` performs this check on every dispatch.
//!
//! Caller-side input rules (name length, email and phone shape, offering
//! selection) live in the [`validation`] module.

pub mod command;
pub mod error;
pub mod queries;
pub mod state;
pub mod transition;
pub mod validation;

pub use command::Command;
pub use error::{ValidationError, ValidationResult};
pub use state::State;
pub use validation::{
    validate_email, validate_name, validate_offering_selection, validate_phone,
    validate_student_name,
};
