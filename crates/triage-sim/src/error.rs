use thiserror::Error;
use triage_core::TriageError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("hospital error: {0}")]
    Hospital(#[from] TriageError),
}

pub type SimResult<T> = Result<T, SimError>;
