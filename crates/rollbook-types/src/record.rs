//! The four record rows and the id counter block.
//!
//! Field names serialize in camelCase to match the persisted blob format.

use serde::{Deserialize, Serialize};

use crate::id::{CourseId, CourseTypeId, OfferingId, RegistrationId};

/// A category of course delivery, e.g. "Individual" or "Group".
///
/// Names are unique per collection under case-insensitive, trim-normalized
/// comparison. Uniqueness is enforced by callers through the duplicate
/// queries before a mutation is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseType {
    pub id: CourseTypeId,
    pub name: String,
}

impl CourseType {
    pub fn new(id: CourseTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A subject that can be offered, e.g. "English".
///
/// Same naming rules as [`CourseType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
}

impl Course {
    pub fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An enrollable pairing of one course type with one course.
///
/// The `(course_type_id, course_id)` pair is unique across offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub id: OfferingId,
    pub course_type_id: CourseTypeId,
    pub course_id: CourseId,
}

impl Offering {
    pub fn new(id: OfferingId, course_type_id: CourseTypeId, course_id: CourseId) -> Self {
        Self {
            id,
            course_type_id,
            course_id,
        }
    }
}

/// A student registered against an offering.
///
/// `phone` is empty when the student did not supply one. There is no
/// uniqueness constraint across registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub offering_id: OfferingId,
    pub student_name: String,
    pub email: String,
    pub phone: String,
}

impl Registration {
    pub fn new(
        id: RegistrationId,
        offering_id: OfferingId,
        student_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            offering_id,
            student_name: student_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Monotone id counters, one per collection.
///
/// Each counter holds the id the next add will receive. Counters only move
/// forward; deleting a row never hands its id back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NextIds {
    pub course_type: u64,
    pub course: u64,
    pub offering: u64,
    pub registration: u64,
}

impl Default for NextIds {
    fn default() -> Self {
        Self {
            course_type: 1,
            course: 1,
            offering: 1,
            registration: 1,
        }
    }
}
