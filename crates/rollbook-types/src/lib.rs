//! Foundation types for Rollbook.
//!
//! This crate provides the record rows and identifier types used throughout
//! the Rollbook system. Every other Rollbook crate depends on
//! `rollbook-types`.
//!
//! # Key Types
//!
//! - [`CourseTypeId`], [`CourseId`], [`OfferingId`], [`RegistrationId`] —
//!   per-collection numeric identifiers, assigned monotonically and never
//!   reused
//! - [`CourseType`], [`Course`], [`Offering`], [`Registration`] — the four
//!   record rows
//! - [`NextIds`] — the monotone id counter block carried alongside the rows
//!
//! All types serialize with the camelCase field names of the persisted blob
//! format, so snapshots written by earlier versions of the application load
//! unchanged.

pub mod id;
pub mod record;

pub use id::{CourseId, CourseTypeId, OfferingId, RegistrationId};
pub use record::{Course, CourseType, NextIds, Offering, Registration};
