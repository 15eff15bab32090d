//! VR session controller.
//!
//! The controller owns a [`SessionState`] and changes it only through
//! [`transition`], a pure function. Everything the host UI shows is
//! read back through [`ViewModeController::view`].

mod controller;
mod error;
mod transition;
mod view;

pub use controller::{ActionOutcome, UnavailableActionPolicy, ViewModeController};
pub use error::TransitionError;
pub use transition::{transition, SessionState};
pub use view::{project, ControlVisibility, ViewProjection, Visibility};
