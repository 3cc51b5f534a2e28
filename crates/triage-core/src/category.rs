//! Triage severity category.
//!
//! Categories run from C1 (most urgent) to C5 (least urgent).  The derived
//! `Ord` is ascending on the inner value, so "smaller sorts first" is exactly
//! the admission-queue priority order.

use std::fmt;

use crate::TriageError;

/// Severity level in `[1, 5]`, 1 = most urgent.
///
/// Construction goes through [`Category::new`] / `TryFrom<u8>`, which reject
/// out-of-range values — a `Category` in hand is always valid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category(u8);

impl Category {
    /// Most urgent category (C1).
    pub const MOST_URGENT: Category = Category(1);
    /// Least urgent category (C5).
    pub const LEAST_URGENT: Category = Category(5);

    /// Validate and wrap a raw severity value.
    pub fn new(value: u8) -> Result<Self, TriageError> {
        if (1..=5).contains(&value) {
            Ok(Category(value))
        } else {
            Err(TriageError::InvalidCategory(value))
        }
    }

    /// The raw severity value in `[1, 5]`.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// `true` for C1 — no strictly more urgent category exists.
    #[inline]
    pub fn is_most_urgent(self) -> bool {
        self.0 == 1
    }
}

impl TryFrom<u8> for Category {
    type Error = TriageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Category::new(value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}
