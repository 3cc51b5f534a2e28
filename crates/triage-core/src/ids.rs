//! Strongly typed patient identifier.
//!
//! The inner integer is `pub` for construction by generators and tests, but
//! collaborators should treat the value as opaque: the only contract is that
//! ids are unique within a run and stable from creation to close-out.

use std::fmt;
use std::str::FromStr;

use crate::TriageError;

/// Unique patient identifier, assigned once at creation.
///
/// Displays (and parses) as `P<number>` — the form used in summary lines and
/// typed by operators in the reassignment menu.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientId(pub u32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('P')
            .ok_or_else(|| TriageError::Parse(format!("invalid patient id {s:?}: expected P<number>")))?;
        digits
            .parse::<u32>()
            .map(PatientId)
            .map_err(|_| TriageError::Parse(format!("invalid patient id {s:?}: expected P<number>")))
    }
}
