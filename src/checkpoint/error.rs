//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint does not fit the configuration it is restored under
    #[error("Checkpoint rejected: {0}")]
    ValidationFailed(String),
}
