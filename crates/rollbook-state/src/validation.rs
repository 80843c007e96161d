//! Caller-side input validation.
//!
//! The transition function trusts its inputs, so every place that accepts
//! user input must run these checks before dispatching a command. The rules
//! are identical wherever a field of the same kind appears:
//!
//! - Names: non-blank, 2–30 characters after trimming
//! - Student name: non-blank after trimming
//! - Email: non-empty local part, `@`, non-empty domain with a dotted suffix
//! - Phone: blank, or 7–15 characters of digits, `+`, `-`, and whitespace
//! - Offering selection: both ids must resolve to existing rows

use rollbook_types::{CourseId, CourseTypeId};

use crate::error::{ValidationError, ValidationResult};
use crate::state::State;

/// Characters permitted in a phone number.
const PHONE_CHARS: &[char] = &['+', '-'];

/// Validate a course-type or course name.
///
/// # Examples
///
/// ```
/// use rollbook_state::validate_name;
///
/// assert!(validate_name("English").is_ok());
/// assert!(validate_name("  ").is_err());
/// assert!(validate_name("A").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if trimmed.chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    if trimmed.chars().count() > 30 {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate a student name: anything non-blank is accepted.
pub fn validate_student_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return Err(ValidationError::StudentNameRequired);
    }
    Ok(())
}

/// Validate an email address.
///
/// Deliberately permissive: one `@` separating a non-empty local part from
/// a domain that contains a `.` with non-empty pieces on both sides. Real
/// deliverability is not this layer's problem.
pub fn validate_email(email: &str) -> ValidationResult {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    if local.is_empty() {
        return Err(ValidationError::InvalidEmail);
    }
    let Some((host, suffix)) = domain.rsplit_once('.') else {
        return Err(ValidationError::InvalidEmail);
    };
    if host.is_empty() || suffix.is_empty() {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a phone number. Blank means "not supplied" and is fine.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return Ok(());
    }
    let count = phone.chars().count();
    if !(7..=15).contains(&count) {
        return Err(ValidationError::InvalidPhone);
    }
    if phone
        .chars()
        .all(|ch| ch.is_ascii_digit() || ch.is_whitespace() || PHONE_CHARS.contains(&ch))
    {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Validate that an offering form selection points at existing rows.
///
/// A zero id is the "nothing selected" sentinel the form sends.
pub fn validate_offering_selection(
    state: &State,
    course_type_id: CourseTypeId,
    course_id: CourseId,
) -> ValidationResult {
    if course_type_id.get() == 0 || !state.course_types.iter().any(|ct| ct.id == course_type_id) {
        return Err(ValidationError::CourseTypeNotSelected);
    }
    if course_id.get() == 0 || !state.courses.iter().any(|c| c.id == course_id) {
        return Err(ValidationError::CourseNotSelected);
    }
    Ok(())
}
