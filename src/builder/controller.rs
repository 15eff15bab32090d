//! Builder for constructing view-mode controllers.

use super::config::ControllerConfig;
use super::error::BuildError;
use crate::core::{EnvironmentRotation, SessionHistory, TheaterEnvironment};
use crate::session::{SessionState, UnavailableActionPolicy, ViewModeController};
use std::collections::HashSet;

/// Builder for constructing controllers with a fluent API.
///
/// ```rust
/// use vrx_session::builder::ControllerBuilder;
/// use vrx_session::core::TheaterEnvironment;
/// use vrx_session::session::UnavailableActionPolicy;
///
/// let controller = ControllerBuilder::new()
///     .policy(UnavailableActionPolicy::Reject)
///     .environments(vec![TheaterEnvironment::ImaxDome, TheaterEnvironment::Underwater])
///     .initial_environment(TheaterEnvironment::ImaxDome)
///     .history_capacity(32)
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.environment(), TheaterEnvironment::ImaxDome);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ControllerBuilder {
    config: ControllerConfig,
}

impl ControllerBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn policy(mut self, policy: UnavailableActionPolicy) -> Self {
        self.config.unavailable_action_policy = policy;
        self
    }

    pub fn initial_environment(mut self, environment: TheaterEnvironment) -> Self {
        self.config.initial_environment = environment;
        self
    }

    /// Set the order change-environment cycles through.
    pub fn environments(mut self, environments: Vec<TheaterEnvironment>) -> Self {
        self.config.environments = environments;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = Some(capacity);
        self
    }

    /// Build the controller.
    /// Returns an error if the configuration is inconsistent.
    pub fn build(self) -> Result<ViewModeController, BuildError> {
        let (rotation, history) = validate_config(&self.config)?;

        tracing::debug!(
            policy = ?self.config.unavailable_action_policy,
            environments = rotation.environments().len(),
            "built view-mode controller"
        );

        Ok(ViewModeController::from_parts(
            SessionState::new(self.config.initial_environment),
            rotation,
            self.config.unavailable_action_policy,
            history,
        ))
    }
}

/// Run every consistency check on `config`, returning the validated
/// rotation and an empty history sized by the configured capacity.
pub(crate) fn validate_config(
    config: &ControllerConfig,
) -> Result<(EnvironmentRotation, SessionHistory), BuildError> {
    let rotation = validate_rotation(config)?;
    let history = empty_history(config)?;

    if !rotation.contains(config.initial_environment) {
        return Err(BuildError::InitialEnvironmentNotInRotation(
            config.initial_environment,
        ));
    }

    Ok((rotation, history))
}

fn validate_rotation(
    config: &ControllerConfig,
) -> Result<EnvironmentRotation, BuildError> {
    if config.environments.is_empty() {
        return Err(BuildError::EmptyRotation);
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = config
        .environments
        .iter()
        .find(|environment| !seen.insert(**environment))
    {
        return Err(BuildError::DuplicateEnvironment(*duplicate));
    }

    Ok(EnvironmentRotation::new_unchecked(
        config.environments.clone(),
    ))
}

fn empty_history(config: &ControllerConfig) -> Result<SessionHistory, BuildError> {
    match config.history_capacity {
        Some(0) => Err(BuildError::ZeroHistoryCapacity),
        Some(capacity) => Ok(SessionHistory::with_capacity(capacity)),
        None => Ok(SessionHistory::new()),
    }
}
