//! The immutable state snapshot.

use serde::{Deserialize, Serialize};

use rollbook_types::{Course, CourseType, NextIds, Offering, Registration};

/// One snapshot of the whole record store.
///
/// A snapshot is never mutated in place: [`State::apply`](crate::State::apply)
/// consumes a reference and returns the next snapshot. Every field carries
/// `#[serde(default)]`, so a persisted blob missing a top-level field still
/// deserializes into a structurally complete state with that field at its
/// default. Collections that are present in the blob fully replace the empty
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    pub course_types: Vec<CourseType>,
    pub courses: Vec<Course>,
    pub offerings: Vec<Offering>,
    pub registrations: Vec<Registration>,
    pub next_ids: NextIds,
}

impl State {
    /// The empty state: all collections empty, all counters at 1.
    pub fn new() -> Self {
        Self::default()
    }
}
