//! Fatal errors raised by the splitting solvers

use thiserror::Error;

/// Errors that abort a solve before the first iteration.
///
/// Everything that can go wrong *during* a solve (hitting the iteration cap,
/// an exhausted backtracking loop, ...) is reported as a
/// [`Warning`](crate::diagnostics::Warning) instead and never aborts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// A solver option is outside of its admissible range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for the splitting solvers.
pub type SplitResult<T> = Result<T, SplitError>;

pub(crate) fn invalid<T>(msg: impl Into<String>) -> SplitResult<T> {
    Err(SplitError::InvalidConfiguration(msg.into()))
}
