//! Attention area enum shared across all hospital-related crates.
//!
//! The string forms are an observable contract: they appear verbatim in
//! patient summary lines and in the persisted roster file, so they keep the
//! original labels rather than translated ones.

use std::fmt;
use std::str::FromStr;

use crate::TriageError;

/// The department a patient is routed to after being attended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Area {
    /// Primary urgent care (SAPU).
    Sapu,
    /// Adult emergency.
    AdultEmergency,
    /// Pediatric emergency.
    Pediatric,
}

impl Area {
    /// All areas, in the round-robin assignment order used by the generator.
    pub const ALL: [Area; 3] = [Area::Sapu, Area::AdultEmergency, Area::Pediatric];

    /// Wire/display label, used in summary lines and the roster file.
    pub fn as_str(self) -> &'static str {
        match self {
            Area::Sapu           => "SAPU",
            Area::AdultEmergency => "urgencia_adulto",
            Area::Pediatric      => "infantil",
        }
    }
}

impl FromStr for Area {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SAPU"            => Ok(Area::Sapu),
            "urgencia_adulto" => Ok(Area::AdultEmergency),
            "infantil"        => Ok(Area::Pediatric),
            other             => Err(TriageError::UnknownArea(other.to_string())),
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
