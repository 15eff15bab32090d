//! Controller that owns the session state and applies user actions.

use super::error::TransitionError;
use super::transition::{transition, SessionState};
use super::view::{project, ViewProjection};
use crate::core::{
    Action, EnvironmentRotation, SessionHistory, SessionMode, TheaterEnvironment,
    TransitionRecord,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// How the controller treats an action whose control is hidden.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableActionPolicy {
    /// Leave the state unchanged and report [`ActionOutcome::Ignored`].
    #[default]
    Ignore,
    /// Leave the state unchanged and return [`TransitionError::Unavailable`].
    Reject,
}

/// What happened to an action passed to the controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionOutcome {
    Applied,
    Ignored,
}

/// Owns the session state and mediates every change to it.
///
/// # Example
///
/// ```rust
/// use vrx_session::core::SessionMode;
/// use vrx_session::session::{ViewModeController, Visibility};
///
/// let mut controller = ViewModeController::new();
/// assert_eq!(controller.mode(), SessionMode::Inactive);
/// assert_eq!(controller.status_message(), "");
///
/// controller.enter_vr().unwrap();
/// assert_eq!(controller.status_message(), "VR Mode Active");
/// assert_eq!(controller.view().controls.exit_vr, Visibility::Visible);
///
/// controller.exit_vr().unwrap();
/// assert_eq!(controller.mode(), SessionMode::Inactive);
/// assert_eq!(controller.status_message(), "VR Mode Inactive");
/// ```
#[derive(Clone, Debug)]
pub struct ViewModeController {
    state: SessionState,
    rotation: EnvironmentRotation,
    policy: UnavailableActionPolicy,
    history: SessionHistory,
}

impl Default for ViewModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModeController {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(
            SessionState::default(),
            EnvironmentRotation::default(),
            UnavailableActionPolicy::default(),
            SessionHistory::new(),
        )
    }

    pub(crate) fn from_parts(
        state: SessionState,
        rotation: EnvironmentRotation,
        policy: UnavailableActionPolicy,
        history: SessionHistory,
    ) -> Self {
        Self {
            state,
            rotation,
            policy,
            history,
        }
    }

    pub fn enter_vr(&mut self) -> Result<ActionOutcome, TransitionError> {
        self.apply(Action::EnterVr)
    }

    pub fn exit_vr(&mut self) -> Result<ActionOutcome, TransitionError> {
        self.apply(Action::ExitVr)
    }

    pub fn recenter(&mut self) -> Result<ActionOutcome, TransitionError> {
        self.apply(Action::Recenter)
    }

    /// Advance to the next environment in the rotation.
    pub fn change_environment(&mut self) -> Result<ActionOutcome, TransitionError> {
        self.apply(Action::ChangeEnvironment)
    }

    /// Switch directly to `environment`, which must be in the rotation.
    pub fn select_environment(
        &mut self,
        environment: TheaterEnvironment,
    ) -> Result<ActionOutcome, TransitionError> {
        self.apply(Action::SelectEnvironment(environment))
    }

    /// Apply one action.
    ///
    /// Applied actions update the state and are appended to the history.
    /// Unavailable actions are handled according to the configured
    /// [`UnavailableActionPolicy`].
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, TransitionError> {
        let from = self.state.mode;
        let next = match transition(&self.state, action, &self.rotation) {
            Ok(next) => next,
            Err(TransitionError::Unavailable { .. })
                if self.policy == UnavailableActionPolicy::Ignore =>
            {
                tracing::debug!(%action, mode = %from, "ignoring unavailable action");
                return Ok(ActionOutcome::Ignored);
            }
            Err(err) => {
                tracing::warn!(%action, mode = %from, "rejected action: {err}");
                return Err(err);
            }
        };

        self.history = self.history.record(TransitionRecord {
            action,
            from,
            to: next.mode,
            timestamp: Utc::now(),
        });

        if next.mode != from {
            tracing::info!(from = %from, to = %next.mode, "vr mode changed");
        } else {
            tracing::debug!(
                %action,
                environment = %next.environment,
                status = %next.status_message,
                "applied action"
            );
        }

        self.state = next;
        Ok(ActionOutcome::Applied)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> SessionMode {
        self.state.mode
    }

    pub fn status_message(&self) -> &str {
        &self.state.status_message
    }

    pub fn environment(&self) -> TheaterEnvironment {
        self.state.environment
    }

    pub fn rotation(&self) -> &EnvironmentRotation {
        &self.rotation
    }

    pub fn policy(&self) -> UnavailableActionPolicy {
        self.policy
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Everything the host needs to render the screen.
    pub fn view(&self) -> ViewProjection<'_> {
        ViewProjection {
            status_text: &self.state.status_message,
            environment: self.state.environment,
            controls: project(self.state.mode),
        }
    }
}
