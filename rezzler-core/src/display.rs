use crate::error::OsStatus;
use crate::mode::DisplayMode;

/// How long a committed configuration lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOption {
    /// Reverted when the app exits.
    ForAppOnly,
    /// Reverted at logout.
    ForSession,
    /// Written to the user's display preferences.
    Permanently,
}

/// The primary display, as seen through the OS display service.
///
/// `Config` is the handle of an in-flight configuration transaction. Prefer
/// driving transactions through [`crate::transaction::ConfigTransaction`],
/// which guarantees that a begun transaction is either completed or
/// cancelled.
pub trait DisplayService {
    type Mode: DisplayMode;
    type Config;

    fn current_mode(&self) -> Option<Self::Mode>;

    /// All modes, including duplicates at the same logical size.
    fn all_modes(&self) -> Option<Vec<Self::Mode>>;

    fn begin_configuration(&self) -> Result<Self::Config, OsStatus>;

    fn configure_mode(&self, config: &Self::Config, mode: &Self::Mode) -> Result<(), OsStatus>;

    fn cancel_configuration(&self, config: Self::Config) -> Result<(), OsStatus>;

    fn complete_configuration(
        &self,
        config: Self::Config,
        option: ConfigureOption,
    ) -> Result<(), OsStatus>;
}
