use std::fmt;

use crate::resolution::Resolution;

/// Raw status code returned by the display service (a `CGError` on macOS).
pub type OsStatus = i32;

/// Why a toggle attempt stopped.
///
/// Every variant is non-fatal: the app logs it and keeps running.
/// Only `ModeUnavailable` is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    NoCurrentMode,
    ModeListUnavailable,
    ModeUnavailable(Resolution),
    BeginFailed(OsStatus),
    ConfigureFailed(OsStatus),
    CommitFailed(OsStatus),
}

impl ToggleError {
    /// Whether the display configuration may have been changed.
    pub fn may_have_applied(&self) -> bool {
        matches!(self, ToggleError::CommitFailed(_))
    }
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleError::NoCurrentMode => write!(f, "Failed to read the current display mode"),
            ToggleError::ModeListUnavailable => write!(f, "Failed to get display modes"),
            ToggleError::ModeUnavailable(res) => write!(f, "Resolution {} not available", res),
            ToggleError::BeginFailed(code) => {
                write!(f, "Failed to begin display configuration: {}", code)
            }
            ToggleError::ConfigureFailed(code) => {
                write!(f, "Failed to configure display mode: {}", code)
            }
            ToggleError::CommitFailed(code) => {
                write!(f, "Failed to complete display configuration: {}", code)
            }
        }
    }
}

impl std::error::Error for ToggleError {}
