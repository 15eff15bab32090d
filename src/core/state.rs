//! Core State trait and the session's display mode.
//!
//! The mode is the only piece of state the controller switches between.
//! Everything the host UI shows is derived from it.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are small immutable
/// values describing the current position in the machine.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: States are compared when validating checkpoints
/// - `Debug`: States appear in diagnostics and trace events
/// - `Serialize` + `Deserialize`: States are part of every checkpoint
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Whether the session is currently in VR mode.
///
/// `Inactive` is the initial state. There is no terminal state: the
/// session can move between the two modes indefinitely.
///
/// # Example
///
/// ```rust
/// use vrx_session::core::{SessionMode, State};
///
/// let mode = SessionMode::default();
/// assert_eq!(mode, SessionMode::Inactive);
/// assert_eq!(mode.name(), "Inactive");
/// assert!(!mode.is_final());
/// assert!(SessionMode::Active.is_active());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum SessionMode {
    #[default]
    Inactive,
    Active,
}

impl SessionMode {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl State for SessionMode {
    fn name(&self) -> &str {
        match self {
            Self::Inactive => "Inactive",
            Self::Active => "Active",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
