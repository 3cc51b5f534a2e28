use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster file error: {0}")]
    Csv(#[from] csv::Error),
}
