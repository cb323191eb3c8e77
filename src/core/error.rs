//! Failure taxonomy for a single convert action.

use thiserror::Error;

/// Every way a conversion can fail. All of them end up as a user-visible
/// `ConversionOutcome::Failure`; none is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The amount text did not parse as a finite number. Raised before any I/O.
    #[error("Not a valid amount")]
    InvalidAmount,

    /// Network failure or non-success response; carries the server or client message.
    #[error("{0}")]
    Transport(String),

    /// The product of amount and rate does not fit in an `f64`.
    #[error("Converted amount is out of range")]
    OutOfRange,

    /// The snapshot parsed fine but has no entry for the target code.
    #[error("Unexpected error: rate not found")]
    RateNotFound,
}

impl From<anyhow::Error> for ConvertError {
    fn from(err: anyhow::Error) -> Self {
        ConvertError::Transport(err.to_string())
    }
}
