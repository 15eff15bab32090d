//! Build errors for the controller builder.

use crate::core::TheaterEnvironment;
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Environment rotation is empty. Provide at least one environment")]
    EmptyRotation,

    #[error("Environment '{0}' appears more than once in the rotation")]
    DuplicateEnvironment(TheaterEnvironment),

    #[error("Initial environment '{0}' is not part of the rotation")]
    InitialEnvironmentNotInRotation(TheaterEnvironment),

    #[error("History capacity must be greater than zero")]
    ZeroHistoryCapacity,

    #[error("Invalid controller configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not encode controller configuration: {0}")]
    EncodeFailed(String),
}
