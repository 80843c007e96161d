//! Validation errors surfaced to the presentation layer.
//!
//! The `Display` text of each variant is the short user-facing message the
//! form attaches next to the offending field.

use thiserror::Error;

/// A caller-side validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Name must be under 30 characters")]
    NameTooLong,

    #[error("A course type with this name already exists.")]
    DuplicateCourseType,

    #[error("A course with this name already exists.")]
    DuplicateCourse,

    #[error("This offering already exists.")]
    DuplicateOffering,

    #[error("Please select a course type")]
    CourseTypeNotSelected,

    #[error("Please select a course")]
    CourseNotSelected,

    #[error("Student name is required")]
    StudentNameRequired,

    #[error("Enter a valid email")]
    InvalidEmail,

    #[error("Enter a valid phone number or leave blank")]
    InvalidPhone,
}

/// Result alias for validation checks.
pub type ValidationResult = Result<(), ValidationError>;
