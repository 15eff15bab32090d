//! Transition errors.

use crate::core::{ActionKind, SessionMode, TheaterEnvironment};
use thiserror::Error;

/// Errors that can occur when applying an action
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("Action '{action}' is not available while VR mode is {mode}")]
    Unavailable {
        action: ActionKind,
        mode: SessionMode,
    },

    #[error("Environment '{0}' is not part of the configured rotation")]
    UnknownEnvironment(TheaterEnvironment),
}
