//! Per-collection numeric identifiers.
//!
//! Each collection (course types, courses, offerings, registrations) hands
//! out ids from its own monotone counter starting at 1. An id is never
//! reassigned after its row is deleted. The newtypes keep ids from different
//! collections from being mixed up at compile time.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Wrap a raw id value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// The raw numeric value.
            pub const fn get(self) -> u64 {
                self.0
            }

            /// The id following this one in assignment order.
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`CourseType`](crate::CourseType) row.
    CourseTypeId
);
define_id!(
    /// Identifier of a [`Course`](crate::Course) row.
    CourseId
);
define_id!(
    /// Identifier of an [`Offering`](crate::Offering) row.
    OfferingId
);
define_id!(
    /// Identifier of a [`Registration`](crate::Registration) row.
    RegistrationId
);
