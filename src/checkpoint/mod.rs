//! Checkpoint and restore for session controllers.
//!
//! A host UI that tears down and recreates its screen (rotation, process
//! trimming) can take a checkpoint, stash the encoded bytes, and restore
//! an equivalent controller afterwards. Checkpoints are values; where
//! they are kept is up to the host.

use crate::builder::controller::validate_config;
use crate::builder::ControllerConfig;
use crate::core::{EnvironmentRotation, SessionHistory, TransitionRecord};
use crate::session::{transition, SessionState, ViewModeController};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a controller.
///
/// Configuration (rotation, policy) is not included; it is supplied
/// again on restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub state: SessionState,

    pub history: SessionHistory,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    fn validate(&self, config: &ControllerConfig) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if !config.environments.contains(&self.state.environment) {
            return Err(CheckpointError::ValidationFailed(format!(
                "environment '{}' is not part of the configured rotation",
                self.state.environment
            )));
        }

        if let Some(record) = self.history.records().iter().find(|r| !is_legal(r)) {
            return Err(CheckpointError::ValidationFailed(format!(
                "{} cannot move the session from {} to {}",
                record.action, record.from, record.to
            )));
        }

        if let Some(pair) = self
            .history
            .records()
            .windows(2)
            .find(|pair| pair[0].to != pair[1].from)
        {
            return Err(CheckpointError::ValidationFailed(format!(
                "history breaks between {} and {}: {} then {}",
                pair[0].action, pair[1].action, pair[0].to, pair[1].from
            )));
        }

        match self.history.last() {
            Some(last) if last.to != self.state.mode => {
                Err(CheckpointError::ValidationFailed(format!(
                    "history ends in {} but state is {}",
                    last.to, self.state.mode
                )))
            }
            Some(last) if self.state.status_message != last.action.status_message() => {
                Err(CheckpointError::ValidationFailed(format!(
                    "status '{}' does not follow {}",
                    self.state.status_message, last.action
                )))
            }
            None if !self.state.status_message.is_empty() => {
                Err(CheckpointError::ValidationFailed(format!(
                    "status '{}' without any recorded action",
                    self.state.status_message
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Whether a live controller could have produced `record`.
fn is_legal(record: &TransitionRecord) -> bool {
    let before = SessionState {
        mode: record.from,
        ..SessionState::default()
    };
    transition(&before, record.action, &EnvironmentRotation::default())
        .is_ok_and(|after| after.mode == record.to)
}

impl ViewModeController {
    /// Capture the current state and history.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: self.state().clone(),
            history: self.history().clone(),
        }
    }

    /// Rebuild a controller from a checkpoint under `config`.
    ///
    /// `config` goes through the same checks as `ControllerBuilder::build`.
    /// The history must chain, every record must be a transition the
    /// controller could make, and the state must agree with the last
    /// record. The history is re-bounded by the configured capacity.
    ///
    /// ```rust
    /// use vrx_session::builder::ControllerConfig;
    /// use vrx_session::checkpoint::Checkpoint;
    /// use vrx_session::session::ViewModeController;
    ///
    /// let mut controller = ViewModeController::new();
    /// controller.enter_vr().unwrap();
    ///
    /// let bytes = controller.checkpoint().to_binary().unwrap();
    /// let checkpoint = Checkpoint::from_binary(&bytes).unwrap();
    /// let restored = ViewModeController::restore(checkpoint, &ControllerConfig::default()).unwrap();
    ///
    /// assert_eq!(restored.state(), controller.state());
    /// ```
    pub fn restore(
        checkpoint: Checkpoint,
        config: &ControllerConfig,
    ) -> Result<Self, CheckpointError> {
        let (rotation, empty) = validate_config(config)
            .map_err(|e| CheckpointError::ValidationFailed(e.to_string()))?;

        if let Err(err) = checkpoint.validate(config) {
            tracing::warn!(checkpoint = %checkpoint.id, "refusing checkpoint: {err}");
            return Err(err);
        }

        let history = checkpoint
            .history
            .records()
            .iter()
            .cloned()
            .fold(empty, |history, record| history.record(record));

        tracing::debug!(
            checkpoint = %checkpoint.id,
            mode = %checkpoint.state.mode,
            records = history.records().len(),
            "restored controller from checkpoint"
        );

        Ok(Self::from_parts(
            checkpoint.state,
            rotation,
            config.unavailable_action_policy,
            history,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, SessionMode, TheaterEnvironment, TransitionRecord};

    fn active_controller() -> ViewModeController {
        let mut controller = ViewModeController::new();
        controller.enter_vr().unwrap();
        controller.change_environment().unwrap();
        controller
    }

    #[test]
    fn checkpoint_captures_state_and_history() {
        let controller = active_controller();
        let checkpoint = controller.checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(&checkpoint.state, controller.state());
        assert_eq!(checkpoint.history.records().len(), 2);
    }

    #[test]
    fn checkpoints_get_distinct_ids() {
        let controller = ViewModeController::new();
        assert_ne!(controller.checkpoint().id, controller.checkpoint().id);
    }

    #[test]
    fn json_checkpoint_restores_equivalent_controller() {
        let controller = active_controller();
        let json = controller.checkpoint().to_json().unwrap();

        let checkpoint = Checkpoint::from_json(&json).unwrap();
        let mut restored =
            ViewModeController::restore(checkpoint, &ControllerConfig::default()).unwrap();

        assert_eq!(restored.state(), controller.state());
        assert_eq!(restored.history().records(), controller.history().records());

        restored.exit_vr().unwrap();
        assert_eq!(restored.status_message(), "VR Mode Inactive");
    }

    #[test]
    fn binary_checkpoint_roundtrips() {
        let checkpoint = active_controller().checkpoint();
        let bytes = checkpoint.to_binary().unwrap();
        assert_eq!(Checkpoint::from_binary(&bytes).unwrap(), checkpoint);
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::from_json("{}"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_binary(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn restore_rejects_unknown_version() {
        let mut checkpoint = active_controller().checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let result = ViewModeController::restore(checkpoint, &ControllerConfig::default());
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn restore_rejects_environment_outside_rotation() {
        let checkpoint = active_controller().checkpoint();
        let config = ControllerConfig {
            environments: vec![TheaterEnvironment::Underwater],
            initial_environment: TheaterEnvironment::Underwater,
            ..ControllerConfig::default()
        };

        let result = ViewModeController::restore(checkpoint, &config);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_history_disagreeing_with_state() {
        let mut checkpoint = active_controller().checkpoint();
        checkpoint.state.mode = SessionMode::Inactive;

        let result = ViewModeController::restore(checkpoint, &ControllerConfig::default());
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_invalid_config() {
        let checkpoint = ViewModeController::new().checkpoint();
        let config = ControllerConfig {
            history_capacity: Some(0),
            ..ControllerConfig::default()
        };

        let result = ViewModeController::restore(checkpoint, &config);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_applies_configured_capacity() {
        let mut checkpoint = ViewModeController::new().checkpoint();
        checkpoint.state.mode = SessionMode::Active;
        checkpoint.state.status_message = "View Recentered".to_string();
        for _ in 0..5 {
            checkpoint.history = checkpoint.history.record(TransitionRecord {
                action: Action::Recenter,
                from: SessionMode::Active,
                to: SessionMode::Active,
                timestamp: Utc::now(),
            });
        }
        let config = ControllerConfig {
            history_capacity: Some(3),
            ..ControllerConfig::default()
        };

        let restored = ViewModeController::restore(checkpoint, &config).unwrap();
        assert_eq!(restored.history().records().len(), 3);
        assert_eq!(restored.history().capacity(), Some(3));
    }

    fn enter_record() -> TransitionRecord {
        TransitionRecord {
            action: Action::EnterVr,
            from: SessionMode::Inactive,
            to: SessionMode::Active,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn restore_rejects_history_that_does_not_chain() {
        let mut checkpoint = ViewModeController::new().checkpoint();
        checkpoint.history = SessionHistory::new()
            .record(enter_record())
            .record(enter_record());
        checkpoint.state.mode = SessionMode::Active;
        checkpoint.state.status_message = "VR Mode Active".to_string();

        let result = ViewModeController::restore(checkpoint, &ControllerConfig::default());
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_impossible_record() {
        let mut checkpoint = ViewModeController::new().checkpoint();
        checkpoint.history = SessionHistory::new().record(TransitionRecord {
            action: Action::Recenter,
            from: SessionMode::Inactive,
            to: SessionMode::Inactive,
            timestamp: Utc::now(),
        });
        checkpoint.state.status_message = "View Recentered".to_string();

        let result = ViewModeController::restore(checkpoint, &ControllerConfig::default());
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_status_not_matching_last_action() {
        let mut checkpoint = active_controller().checkpoint();
        checkpoint.state.status_message = "View Recentered".to_string();

        let result = ViewModeController::restore(checkpoint, &ControllerConfig::default());
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_status_without_history() {
        let mut checkpoint = ViewModeController::new().checkpoint();
        checkpoint.state.status_message = "VR Mode Inactive".to_string();

        let result = ViewModeController::restore(checkpoint, &ControllerConfig::default());
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_runs_the_same_config_checks_as_build() {
        let config = ControllerConfig {
            environments: vec![
                TheaterEnvironment::ClassicTheater,
                TheaterEnvironment::ModernTheater,
            ],
            initial_environment: TheaterEnvironment::Underwater,
            ..ControllerConfig::default()
        };
        assert!(crate::builder::ControllerBuilder::new()
            .config(config.clone())
            .build()
            .is_err());

        let checkpoint = active_controller().checkpoint();
        let result = ViewModeController::restore(checkpoint, &config);
        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }
}
