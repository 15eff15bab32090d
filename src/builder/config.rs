//! Serializable controller configuration.

use super::error::BuildError;
use crate::core::TheaterEnvironment;
use crate::session::UnavailableActionPolicy;
use serde::{Deserialize, Serialize};

/// Settings a host can ship alongside its layout.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration. Anything other than an object, and any unknown key, is
/// rejected.
///
/// ```rust
/// use vrx_session::builder::ControllerConfig;
/// use vrx_session::core::TheaterEnvironment;
/// use vrx_session::session::UnavailableActionPolicy;
///
/// let config = ControllerConfig::from_json(
///     r#"{ "unavailable_action_policy": "reject", "environments": ["ImaxDome", "Underwater"] }"#,
/// )
/// .unwrap();
/// assert_eq!(config.unavailable_action_policy, UnavailableActionPolicy::Reject);
/// assert_eq!(config.environments.len(), 2);
/// assert_eq!(config.initial_environment, TheaterEnvironment::ClassicTheater);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    pub unavailable_action_policy: UnavailableActionPolicy,
    pub initial_environment: TheaterEnvironment,
    /// Order that change-environment cycles through
    pub environments: Vec<TheaterEnvironment>,
    /// Maximum retained history records; unbounded when `None`
    pub history_capacity: Option<usize>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            unavailable_action_policy: UnavailableActionPolicy::default(),
            initial_environment: TheaterEnvironment::default(),
            environments: TheaterEnvironment::ALL.to_vec(),
            history_capacity: None,
        }
    }
}

impl ControllerConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        if !value.is_object() {
            return Err(BuildError::InvalidConfig(
                "configuration must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::EncodeFailed(e.to_string()))
    }
}
