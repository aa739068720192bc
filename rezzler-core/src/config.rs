use std::time::Duration;

use crate::display::ConfigureOption;
use crate::resolution::ResolutionTable;

/// Delay before the second cursor warp, giving the display time to settle.
pub const REWARP_DELAY: Duration = Duration::from_millis(100);

/// Toggler tunables. There is no settings file; the app uses `default()`.
#[derive(Debug, Clone)]
pub struct TogglerConfig {
    pub table: ResolutionTable,
    pub rewarp_delay: Duration,
    /// Keep the cursor at the same proportional spot across a switch.
    pub preserve_cursor: bool,
    pub configure_option: ConfigureOption,
}

impl Default for TogglerConfig {
    fn default() -> Self {
        TogglerConfig {
            table: ResolutionTable::default(),
            rewarp_delay: REWARP_DELAY,
            preserve_cursor: true,
            configure_option: ConfigureOption::Permanently,
        }
    }
}
