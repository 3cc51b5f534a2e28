//! Common error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `TriageError` via `From` impls, or keep them separate and wrap
//! `TriageError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::PatientId;

/// The top-level error type for `triage-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("patient {0} not found")]
    PatientNotFound(PatientId),

    #[error("invalid category {0}: must be between 1 and 5")]
    InvalidCategory(u8),

    #[error("unknown area {0:?}")]
    UnknownArea(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `triage-*` crates.
pub type TriageResult<T> = Result<T, TriageError>;
