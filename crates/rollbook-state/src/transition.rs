//! The pure state transition.
//!
//! [`State::apply`] is a function from `(snapshot, command)` to the next
//! snapshot. The input is never mutated, so readers holding the previous
//! snapshot stay valid and a history/undo layer can be bolted on later
//! without touching this module.

use std::collections::HashSet;

use rollbook_types::{
    Course, CourseId, CourseType, CourseTypeId, Offering, OfferingId, Registration,
    RegistrationId,
};

use crate::command::Command;
use crate::state::State;

impl State {
    /// Apply one command, producing the next snapshot.
    ///
    /// Uniqueness of names and offering pairs is the caller's
    /// responsibility; consult the duplicate queries before dispatching.
    /// See the crate-level docs for the full contract.
    pub fn apply(&self, command: &Command) -> State {
        let mut next = self.clone();
        match command {
            Command::AddCourseType { name } => {
                let id = CourseTypeId::new(next.next_ids.course_type);
                next.course_types.push(CourseType::new(id, name.clone()));
                next.next_ids.course_type += 1;
            }
            Command::UpdateCourseType { id, name } => {
                if let Some(row) = next.course_types.iter_mut().find(|ct| ct.id == *id) {
                    row.name = name.clone();
                }
            }
            Command::DeleteCourseType { id } => {
                next.course_types.retain(|ct| ct.id != *id);
                let removed = offerings_removed_by(&next, |o| o.course_type_id == *id);
                next.offerings.retain(|o| o.course_type_id != *id);
                next.registrations
                    .retain(|r| !removed.contains(&r.offering_id));
            }

            Command::AddCourse { name } => {
                let id = CourseId::new(next.next_ids.course);
                next.courses.push(Course::new(id, name.clone()));
                next.next_ids.course += 1;
            }
            Command::UpdateCourse { id, name } => {
                if let Some(row) = next.courses.iter_mut().find(|c| c.id == *id) {
                    row.name = name.clone();
                }
            }
            Command::DeleteCourse { id } => {
                next.courses.retain(|c| c.id != *id);
                let removed = offerings_removed_by(&next, |o| o.course_id == *id);
                next.offerings.retain(|o| o.course_id != *id);
                next.registrations
                    .retain(|r| !removed.contains(&r.offering_id));
            }

            Command::AddOffering {
                course_type_id,
                course_id,
            } => {
                let id = OfferingId::new(next.next_ids.offering);
                next.offerings
                    .push(Offering::new(id, *course_type_id, *course_id));
                next.next_ids.offering += 1;
            }
            Command::UpdateOffering {
                id,
                course_type_id,
                course_id,
            } => {
                if let Some(row) = next.offerings.iter_mut().find(|o| o.id == *id) {
                    row.course_type_id = *course_type_id;
                    row.course_id = *course_id;
                }
            }
            Command::DeleteOffering { id } => {
                next.offerings.retain(|o| o.id != *id);
                next.registrations.retain(|r| r.offering_id != *id);
            }

            Command::AddRegistration {
                offering_id,
                student_name,
                email,
                phone,
            } => {
                let id = RegistrationId::new(next.next_ids.registration);
                next.registrations.push(Registration::new(
                    id,
                    *offering_id,
                    student_name.clone(),
                    email.clone(),
                    phone.clone().unwrap_or_default(),
                ));
                next.next_ids.registration += 1;
            }
            Command::DeleteRegistration { id } => {
                next.registrations.retain(|r| r.id != *id);
            }

            Command::ResetAll => {
                next = State::default();
            }
        }
        next
    }
}

/// Collect the ids of offerings about to be removed by a cascade.
///
/// Kept as an explicit first step so the registration filter below it runs
/// against a concrete id set rather than depending on deletion order.
fn offerings_removed_by(state: &State, doomed: impl Fn(&Offering) -> bool) -> HashSet<OfferingId> {
    state
        .offerings
        .iter()
        .filter(|o| doomed(o))
        .map(|o| o.id)
        .collect()
}
