//! Core session types.
//!
//! This module contains the pure values the controller is built from:
//! - The session mode via the `State` trait
//! - Actions and their status labels
//! - Theater environments and their rotation
//! - Immutable history tracking
//!
//! Nothing in this module has side effects.

mod action;
mod environment;
mod history;
mod state;

pub use action::{
    Action, ActionKind, STATUS_ENVIRONMENT_CHANGED, STATUS_RECENTERED, STATUS_VR_ACTIVE,
    STATUS_VR_INACTIVE,
};
pub use environment::{EnvironmentRotation, TheaterEnvironment};
pub use history::{SessionHistory, TransitionRecord};
pub use state::{SessionMode, State};
