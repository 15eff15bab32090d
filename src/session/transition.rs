//! Pure transition function for session state.

use super::error::TransitionError;
use super::view::project;
use crate::core::{Action, EnvironmentRotation, SessionMode, TheaterEnvironment};
use serde::{Deserialize, Serialize};

/// The complete state of a VR session.
///
/// Control visibility is not part of the state; it is derived from
/// `mode` by [`project`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub mode: SessionMode,
    /// Label for the last applied action. Empty until the first one.
    pub status_message: String,
    pub environment: TheaterEnvironment,
}

impl SessionState {
    pub fn new(environment: TheaterEnvironment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }
}

/// Compute the state that results from applying `action` to `state`.
///
/// Fails with [`TransitionError::Unavailable`] when the action's control
/// is hidden in the current mode, and with
/// [`TransitionError::UnknownEnvironment`] when a selected environment is
/// outside `rotation`. On failure nothing has changed.
pub fn transition(
    state: &SessionState,
    action: Action,
    rotation: &EnvironmentRotation,
) -> Result<SessionState, TransitionError> {
    if !project(state.mode).is_enabled(&action) {
        return Err(TransitionError::Unavailable {
            action: action.kind(),
            mode: state.mode,
        });
    }

    let (mode, environment) = match action {
        Action::EnterVr => (SessionMode::Active, state.environment),
        Action::ExitVr => (SessionMode::Inactive, state.environment),
        Action::Recenter => (state.mode, state.environment),
        Action::ChangeEnvironment => (state.mode, rotation.next_after(state.environment)),
        Action::SelectEnvironment(selected) => {
            if !rotation.contains(selected) {
                return Err(TransitionError::UnknownEnvironment(selected));
            }
            (state.mode, selected)
        }
    };

    Ok(SessionState {
        mode,
        status_message: action.status_message().to_string(),
        environment,
    })
}
