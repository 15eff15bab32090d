//! Builder API for configuring controllers.
//!
//! A [`ControllerConfig`] can be assembled in code or loaded from JSON, and
//! [`ControllerBuilder`] validates it before handing out a controller.

pub mod config;
pub mod controller;
pub mod error;

pub use config::ControllerConfig;
pub use controller::ControllerBuilder;
pub use error::BuildError;

use crate::session::ViewModeController;

/// Build a controller straight from a JSON configuration.
///
/// ```
/// use vrx_session::builder::from_json;
///
/// let controller = from_json(r#"{ "history_capacity": 64 }"#).unwrap();
/// assert_eq!(controller.history().capacity(), Some(64));
/// ```
pub fn from_json(json: &str) -> Result<ViewModeController, BuildError> {
    ControllerBuilder::new()
        .config(ControllerConfig::from_json(json)?)
        .build()
}
