use crate::display::{ConfigureOption, DisplayService};
use crate::error::ToggleError;

/// A begun display-configuration transaction.
///
/// Dropping it without calling [`commit`](Self::commit) cancels it, so a
/// failed `configure` never leaves the display service mid-transaction.
pub struct ConfigTransaction<'a, D: DisplayService> {
    display: &'a D,
    config: Option<D::Config>,
}

impl<'a, D: DisplayService> ConfigTransaction<'a, D> {
    pub fn begin(display: &'a D) -> Result<Self, ToggleError> {
        let config = display
            .begin_configuration()
            .map_err(ToggleError::BeginFailed)?;
        Ok(ConfigTransaction {
            display,
            config: Some(config),
        })
    }

    pub fn configure(&mut self, mode: &D::Mode) -> Result<(), ToggleError> {
        match &self.config {
            Some(config) => self
                .display
                .configure_mode(config, mode)
                .map_err(ToggleError::ConfigureFailed),
            None => Ok(()),
        }
    }

    /// Complete the transaction. There is no rollback if this fails.
    pub fn commit(mut self, option: ConfigureOption) -> Result<(), ToggleError> {
        match self.config.take() {
            Some(config) => self
                .display
                .complete_configuration(config, option)
                .map_err(ToggleError::CommitFailed),
            None => Ok(()),
        }
    }
}

impl<D: DisplayService> Drop for ConfigTransaction<'_, D> {
    fn drop(&mut self) {
        if let Some(config) = self.config.take() {
            log::debug!("Cancelling display configuration");
            if let Err(code) = self.display.cancel_configuration(config) {
                log::warn!("Failed to cancel display configuration: {}", code);
            }
        }
    }
}

/// Apply `mode` to the display in a single begin/configure/commit pass.
pub fn apply_mode<D: DisplayService>(
    display: &D,
    mode: &D::Mode,
    option: ConfigureOption,
) -> Result<(), ToggleError> {
    let mut transaction = ConfigTransaction::begin(display)?;
    transaction.configure(mode)?;
    transaction.commit(option)
}
