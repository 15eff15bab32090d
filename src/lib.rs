//! vrx-session: view state for a theater app's VR mode.
//!
//! The crate owns one decision, whether the session is in VR mode, and
//! derives everything the screen shows from it. Host UIs forward button
//! presses and read back a status label plus the visibility of each
//! control. Rendering, sensors and scene loading live elsewhere.
//!
//! # Core Concepts
//!
//! - **Mode**: `SessionMode::{Inactive, Active}`, the single source of truth
//! - **Actions**: enter, exit, recenter and change/select environment
//! - **Projection**: a pure mapping from mode to control visibility
//! - **History**: immutable record of applied actions
//! - **Checkpoint**: serializable snapshot for surviving UI recreation
//!
//! # Example
//!
//! ```rust
//! use vrx_session::core::{SessionMode, TheaterEnvironment};
//! use vrx_session::session::{ViewModeController, Visibility};
//!
//! let mut controller = ViewModeController::new();
//! controller.enter_vr().unwrap();
//! controller.change_environment().unwrap();
//!
//! let view = controller.view();
//! assert_eq!(view.status_text, "Environment Changed");
//! assert_eq!(view.environment, TheaterEnvironment::ModernTheater);
//! assert_eq!(view.controls.enter_vr, Visibility::Gone);
//! assert_eq!(controller.mode(), SessionMode::Active);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder, ControllerConfig};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{Action, SessionMode, State, TheaterEnvironment};
pub use session::{
    project, ActionOutcome, ControlVisibility, SessionState, TransitionError,
    UnavailableActionPolicy, ViewModeController, Visibility,
};
