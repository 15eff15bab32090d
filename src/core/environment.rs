//! Theater environments and the order they are cycled in.
//!
//! Environments are plain names here. Loading or rendering the scene
//! behind a name is left to the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable theater environment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TheaterEnvironment {
    #[default]
    ClassicTheater,
    ModernTheater,
    ImaxDome,
    OutdoorCinema,
    SpaceStation,
    Underwater,
}

impl TheaterEnvironment {
    /// Every environment, in declaration order.
    pub const ALL: [TheaterEnvironment; 6] = [
        Self::ClassicTheater,
        Self::ModernTheater,
        Self::ImaxDome,
        Self::OutdoorCinema,
        Self::SpaceStation,
        Self::Underwater,
    ];

    /// Human-readable label for selection lists.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::ClassicTheater => "Classic Theater",
            Self::ModernTheater => "Modern Theater",
            Self::ImaxDome => "IMAX Dome",
            Self::OutdoorCinema => "Outdoor Cinema",
            Self::SpaceStation => "Space Station",
            Self::Underwater => "Underwater",
        }
    }
}

impl fmt::Display for TheaterEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordered list of environments that `change_environment` steps through.
///
/// A rotation is only ever built through the controller builder, which
/// rejects empty lists and duplicates.
///
/// # Example
///
/// ```rust
/// use vrx_session::core::{EnvironmentRotation, TheaterEnvironment};
///
/// let rotation = EnvironmentRotation::default();
/// assert_eq!(
///     rotation.next_after(TheaterEnvironment::ClassicTheater),
///     TheaterEnvironment::ModernTheater
/// );
/// // Wraps at the end
/// assert_eq!(
///     rotation.next_after(TheaterEnvironment::Underwater),
///     TheaterEnvironment::ClassicTheater
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRotation {
    environments: Vec<TheaterEnvironment>,
}

impl Default for EnvironmentRotation {
    fn default() -> Self {
        Self {
            environments: TheaterEnvironment::ALL.to_vec(),
        }
    }
}

impl EnvironmentRotation {
    pub(crate) fn new_unchecked(environments: Vec<TheaterEnvironment>) -> Self {
        Self { environments }
    }

    pub fn environments(&self) -> &[TheaterEnvironment] {
        &self.environments
    }

    pub fn contains(&self, environment: TheaterEnvironment) -> bool {
        self.environments.contains(&environment)
    }

    /// The environment following `current`, wrapping at the end.
    ///
    /// An environment outside the rotation advances to the first entry.
    pub fn next_after(&self, current: TheaterEnvironment) -> TheaterEnvironment {
        let next = self
            .environments
            .iter()
            .position(|env| *env == current)
            .map_or(0, |index| (index + 1) % self.environments.len());
        self.environments.get(next).copied().unwrap_or(current)
    }
}
