//! Errors raised while emitting service messages.

use thiserror::Error;

/// Failure to deliver a service message.
///
/// Callers are expected to abort the run.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write service message: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to encode error report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("shared output lock poisoned")]
    Poisoned,
}
