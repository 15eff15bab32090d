//! User-triggered actions.
//!
//! Each action corresponds to one on-screen control. Applied actions
//! also determine the status label text.

use super::environment::TheaterEnvironment;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STATUS_VR_ACTIVE: &str = "VR Mode Active";
pub const STATUS_VR_INACTIVE: &str = "VR Mode Inactive";
pub const STATUS_RECENTERED: &str = "View Recentered";
pub const STATUS_ENVIRONMENT_CHANGED: &str = "Environment Changed";

/// An input event coming from the host UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    EnterVr,
    ExitVr,
    Recenter,
    /// Advance to the next environment in the rotation.
    ChangeEnvironment,
    /// Jump to a specific environment, as picked from a selection list.
    SelectEnvironment(TheaterEnvironment),
}

/// Payload-free discriminant of [`Action`], used for counting and
/// for looking up the control that triggers an action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ActionKind {
    EnterVr,
    ExitVr,
    Recenter,
    ChangeEnvironment,
    SelectEnvironment,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::EnterVr => ActionKind::EnterVr,
            Self::ExitVr => ActionKind::ExitVr,
            Self::Recenter => ActionKind::Recenter,
            Self::ChangeEnvironment => ActionKind::ChangeEnvironment,
            Self::SelectEnvironment(_) => ActionKind::SelectEnvironment,
        }
    }

    /// Status label shown after this action is applied.
    pub fn status_message(&self) -> &'static str {
        match self {
            Self::EnterVr => STATUS_VR_ACTIVE,
            Self::ExitVr => STATUS_VR_INACTIVE,
            Self::Recenter => STATUS_RECENTERED,
            Self::ChangeEnvironment | Self::SelectEnvironment(_) => STATUS_ENVIRONMENT_CHANGED,
        }
    }
}

impl ActionKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::EnterVr => "EnterVr",
            Self::ExitVr => "ExitVr",
            Self::Recenter => "Recenter",
            Self::ChangeEnvironment => "ChangeEnvironment",
            Self::SelectEnvironment => "SelectEnvironment",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectEnvironment(env) => write!(f, "SelectEnvironment({env})"),
            other => f.write_str(other.kind().name()),
        }
    }
}
