//! The command set: every mutation the store accepts.

use rollbook_types::{CourseId, CourseTypeId, OfferingId, RegistrationId};

/// A mutation applied to the state through [`State::apply`](crate::State::apply).
///
/// Adds assign the next id from the matching counter. Updates on an absent
/// id are no-ops. Deletes cascade: removing a course type or course removes
/// its offerings and, transitively, their registrations; removing an
/// offering removes its registrations. Cascades run unconditionally — any
/// confirmation prompt belongs to the presentation layer, before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddCourseType {
        name: String,
    },
    UpdateCourseType {
        id: CourseTypeId,
        name: String,
    },
    DeleteCourseType {
        id: CourseTypeId,
    },

    AddCourse {
        name: String,
    },
    UpdateCourse {
        id: CourseId,
        name: String,
    },
    DeleteCourse {
        id: CourseId,
    },

    AddOffering {
        course_type_id: CourseTypeId,
        course_id: CourseId,
    },
    UpdateOffering {
        id: OfferingId,
        course_type_id: CourseTypeId,
        course_id: CourseId,
    },
    DeleteOffering {
        id: OfferingId,
    },

    AddRegistration {
        offering_id: OfferingId,
        student_name: String,
        email: String,
        /// Defaults to the empty string when the form leaves it blank.
        phone: Option<String>,
    },
    DeleteRegistration {
        id: RegistrationId,
    },

    /// Replace the whole state with the empty default, counters back to 1.
    ResetAll,
}
