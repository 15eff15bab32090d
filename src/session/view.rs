//! Projection of the session mode onto the four on-screen controls.
//!
//! Visibility is never stored. It is recomputed from the mode, so the
//! four controls cannot drift out of sync with each other.

use crate::core::{Action, ActionKind, SessionMode, TheaterEnvironment};
use serde::{Deserialize, Serialize};

/// Visibility of a single control.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Visibility {
    Visible,
    Gone,
}

impl Visibility {
    fn when(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Gone
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Visibility of every control for one mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ControlVisibility {
    pub enter_vr: Visibility,
    pub exit_vr: Visibility,
    pub recenter: Visibility,
    pub change_environment: Visibility,
}

impl ControlVisibility {
    /// Whether the control that triggers `action` is shown.
    ///
    /// Direct environment selection is offered from the same control as
    /// change-environment.
    pub fn is_enabled(&self, action: &Action) -> bool {
        let visibility = match action.kind() {
            ActionKind::EnterVr => self.enter_vr,
            ActionKind::ExitVr => self.exit_vr,
            ActionKind::Recenter => self.recenter,
            ActionKind::ChangeEnvironment | ActionKind::SelectEnvironment => {
                self.change_environment
            }
        };
        visibility.is_visible()
    }
}

/// Derive control visibility from the session mode.
///
/// ```rust
/// use vrx_session::core::SessionMode;
/// use vrx_session::session::{project, Visibility};
///
/// let controls = project(SessionMode::Inactive);
/// assert_eq!(controls.enter_vr, Visibility::Visible);
/// assert_eq!(controls.exit_vr, Visibility::Gone);
/// ```
pub fn project(mode: SessionMode) -> ControlVisibility {
    let active = mode.is_active();
    ControlVisibility {
        enter_vr: Visibility::when(!active),
        exit_vr: Visibility::when(active),
        recenter: Visibility::when(active),
        change_environment: Visibility::when(active),
    }
}

/// Everything the host UI renders, borrowed from the controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewProjection<'a> {
    pub status_text: &'a str,
    pub environment: TheaterEnvironment,
    pub controls: ControlVisibility,
}
