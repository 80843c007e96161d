//! Derived read operations over a snapshot.
//!
//! All queries are pure and side-effect free. Name comparisons are
//! trim-normalized and case-insensitive, matching the duplicate-prevention
//! rule enforced at the caller layer.

use rollbook_types::{CourseId, CourseTypeId, Offering, OfferingId, Registration};

use crate::state::State;

/// Normalize a name for duplicate comparison.
fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

impl State {
    /// Name of the course type, or `""` if the id is not present.
    pub fn course_type_name(&self, id: CourseTypeId) -> &str {
        self.course_types
            .iter()
            .find(|ct| ct.id == id)
            .map(|ct| ct.name.as_str())
            .unwrap_or("")
    }

    /// Name of the course, or `""` if the id is not present.
    pub fn course_name(&self, id: CourseId) -> &str {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    /// Human-readable label for an offering: `"<type> - <course>"`.
    ///
    /// Dangling references cannot occur through the command set, but a
    /// malformed persisted blob could carry them; a missing side falls back
    /// to the literal `"Type"` or `"Course"` so the display layer never
    /// breaks on bad data.
    pub fn offering_label(&self, offering: &Offering) -> String {
        let type_name = self
            .course_types
            .iter()
            .find(|ct| ct.id == offering.course_type_id)
            .map(|ct| ct.name.as_str())
            .unwrap_or("Type");
        let course_name = self
            .courses
            .iter()
            .find(|c| c.id == offering.course_id)
            .map(|c| c.name.as_str())
            .unwrap_or("Course");
        format!("{type_name} - {course_name}")
    }

    /// Does another course type (id != `exclude`) already carry this name?
    ///
    /// Pass `exclude` when editing so the row keeps its own name without
    /// tripping the check.
    pub fn is_duplicate_course_type(&self, name: &str, exclude: Option<CourseTypeId>) -> bool {
        let wanted = normalized(name);
        self.course_types
            .iter()
            .any(|ct| normalized(&ct.name) == wanted && Some(ct.id) != exclude)
    }

    /// Does another course (id != `exclude`) already carry this name?
    pub fn is_duplicate_course(&self, name: &str, exclude: Option<CourseId>) -> bool {
        let wanted = normalized(name);
        self.courses
            .iter()
            .any(|c| normalized(&c.name) == wanted && Some(c.id) != exclude)
    }

    /// Does another offering (id != `exclude`) already pair these two ids?
    pub fn is_duplicate_offering(
        &self,
        course_type_id: CourseTypeId,
        course_id: CourseId,
        exclude: Option<OfferingId>,
    ) -> bool {
        self.offerings.iter().any(|o| {
            o.course_type_id == course_type_id
                && o.course_id == course_id
                && Some(o.id) != exclude
        })
    }

    /// Offerings under one course type, in insertion order.
    pub fn offerings_for_course_type(&self, id: CourseTypeId) -> Vec<&Offering> {
        self.offerings
            .iter()
            .filter(|o| o.course_type_id == id)
            .collect()
    }

    /// Registrations against one offering, in insertion order.
    pub fn registrations_for_offering(&self, id: OfferingId) -> Vec<&Registration> {
        self.registrations
            .iter()
            .filter(|r| r.offering_id == id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn sample() -> State {
        [
            Command::AddCourseType {
                name: "Individual".into(),
            },
            Command::AddCourseType {
                name: "Group".into(),
            },
            Command::AddCourse {
                name: "English".into(),
            },
            Command::AddOffering {
                course_type_id: CourseTypeId::new(1),
                course_id: CourseId::new(1),
            },
            Command::AddRegistration {
                offering_id: OfferingId::new(1),
                student_name: "Asha".into(),
                email: "asha@example.com".into(),
                phone: None,
            },
        ]
        .iter()
        .fold(State::new(), |state, cmd| state.apply(cmd))
    }

    // ---- Name resolution ----

    #[test]
    fn resolves_names_by_id() {
        let state = sample();
        assert_eq!(state.course_type_name(CourseTypeId::new(1)), "Individual");
        assert_eq!(state.course_name(CourseId::new(1)), "English");
    }

    #[test]
    fn missing_id_resolves_to_empty_string() {
        let state = sample();
        assert_eq!(state.course_type_name(CourseTypeId::new(99)), "");
        assert_eq!(state.course_name(CourseId::new(99)), "");
    }

    // ---- Offering labels ----

    #[test]
    fn label_joins_both_names() {
        let state = sample();
        assert_eq!(
            state.offering_label(&state.offerings[0]),
            "Individual - English"
        );
    }

    #[test]
    fn label_substitutes_placeholders_for_dangling_refs() {
        // Simulate a corrupted blob: offering pointing at rows that are gone.
        let state = sample();
        let dangling = Offering::new(OfferingId::new(9), CourseTypeId::new(77), CourseId::new(1));
        assert_eq!(state.offering_label(&dangling), "Type - English");

        let fully_dangling =
            Offering::new(OfferingId::new(9), CourseTypeId::new(77), CourseId::new(88));
        assert_eq!(state.offering_label(&fully_dangling), "Type - Course");
    }

    // ---- Duplicate checks ----

    #[test]
    fn duplicate_name_is_case_and_whitespace_insensitive() {
        let state = sample();
        assert!(state.is_duplicate_course_type("  individual ", None));
        assert!(state.is_duplicate_course_type("GROUP", None));
        assert!(!state.is_duplicate_course_type("Special", None));
    }

    #[test]
    fn exclude_skips_the_row_being_edited() {
        let state = sample();
        // Editing row 1 back to its own name is not a duplicate.
        assert!(!state.is_duplicate_course_type("Individual", Some(CourseTypeId::new(1))));
        // But clashing with another row still is.
        assert!(state.is_duplicate_course_type("Group", Some(CourseTypeId::new(1))));
    }

    #[test]
    fn duplicate_offering_matches_on_both_fks() {
        let state = sample();
        assert!(state.is_duplicate_offering(CourseTypeId::new(1), CourseId::new(1), None));
        assert!(!state.is_duplicate_offering(CourseTypeId::new(2), CourseId::new(1), None));
        assert!(!state.is_duplicate_offering(
            CourseTypeId::new(1),
            CourseId::new(1),
            Some(OfferingId::new(1)),
        ));
    }

    #[test]
    fn duplicate_course_check_mirrors_course_type() {
        let state = sample();
        assert!(state.is_duplicate_course(" ENGLISH ", None));
        assert!(!state.is_duplicate_course("English", Some(CourseId::new(1))));
    }

    // ---- Filters ----

    #[test]
    fn filters_offerings_by_course_type() {
        let state = sample().apply(&Command::AddOffering {
            course_type_id: CourseTypeId::new(2),
            course_id: CourseId::new(1),
        });
        let for_individual = state.offerings_for_course_type(CourseTypeId::new(1));
        assert_eq!(for_individual.len(), 1);
        assert_eq!(for_individual[0].id, OfferingId::new(1));
    }

    #[test]
    fn filters_registrations_by_offering() {
        let state = sample();
        let regs = state.registrations_for_offering(OfferingId::new(1));
        assert_eq!(regs.len(), 1);
        assert_eq!(regs[0].student_name, "Asha");
        assert!(state
            .registrations_for_offering(OfferingId::new(2))
            .is_empty());
    }
}
