//! Error taxonomy shared by both backends.

use thiserror::Error;

/// Failure of a primitive. Both backends surface the same variants so callers
/// observe identical failures whichever environment is active.
#[derive(Debug, Error)]
pub enum PalError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("type error: {0}")]
    Type(String),
    #[error("size error: expected {expected} bytes, got {actual}")]
    Size { expected: usize, actual: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl PalError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        PalError::Type(msg.into())
    }
}

/// Error signaled by the self-hosted runtime. Renders as its message and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub message: String,
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
