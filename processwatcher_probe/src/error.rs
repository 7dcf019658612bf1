//! Failure taxonomy shared by every process operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The PID does not (or no longer) exist.
    #[error("process {0} not found")]
    NotFound(u32),
    /// Not enough privilege to query or signal the PID.
    #[error("access denied to process {0}")]
    AccessDenied(u32),
    /// Rejected before any OS call was attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
