//! Error types for selection lookups

use thiserror::Error;

/// Errors raised while mapping a selection to its technical identifier.
///
/// `IndexOutOfRange` means a widget's selection index drifted away from the
/// entries backing it. It is a programming error, not a user-input state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("selection index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown streaming mode: {0}")]
    UnknownMode(String),

    #[error("unknown application id: {0}")]
    UnknownApplication(String),
}

pub type LinkResult<T> = Result<T, LinkError>;
