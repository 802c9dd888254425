//! Error types for the tks-proto crate.

use thiserror::Error;

/// Errors that can occur while handling wire messages.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// Failed to encode a message.
    #[error("encoding error: {0}")]
    Encoding(String),
}
