use std::rc::Rc;

use crate::config::TogglerConfig;
use crate::cursor::{self, CursorControl, Point};
use crate::display::DisplayService;
use crate::error::ToggleError;
use crate::indicator::{StatusGlyph, StatusIndicator};
use crate::mode::{self, DisplayMode};
use crate::resolution::Resolution;
use crate::schedule::{ScheduledTask, Scheduler};
use crate::transaction;

pub const UNAVAILABLE_TITLE: &str = "Resolution Error";

/// Body of the alert shown when the display has no mode for `target`.
pub fn unavailable_message(target: Resolution) -> String {
    format!(
        "Resolution {} is not available on this display.\n\nCheck the log for available modes.",
        target
    )
}

/// Blocking warning dialog with a single "OK" button.
pub trait AlertPresenter {
    fn show_warning(&self, title: &str, message: &str);
}

/// Mouse button released on the status item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Primary,
    Secondary,
}

/// What the app should do after a click has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Continue,
    Terminate,
}

/// Switches the primary display between the resolutions in the configured
/// table and keeps the status glyph in step.
pub struct DisplayResolutionToggler<D: DisplayService> {
    display: D,
    cursor: Rc<dyn CursorControl>,
    scheduler: Box<dyn Scheduler>,
    alerts: Box<dyn AlertPresenter>,
    config: TogglerConfig,
    pending_rewarp: Option<Box<dyn ScheduledTask>>,
}

impl<D: DisplayService> DisplayResolutionToggler<D> {
    pub fn new(
        display: D,
        cursor: Rc<dyn CursorControl>,
        scheduler: Box<dyn Scheduler>,
        alerts: Box<dyn AlertPresenter>,
        config: TogglerConfig,
    ) -> Self {
        DisplayResolutionToggler {
            display,
            cursor,
            scheduler,
            alerts,
            config,
            pending_rewarp: None,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn config(&self) -> &TogglerConfig {
        &self.config
    }

    pub fn handle_click(
        &mut self,
        click: Click,
        status: Option<&dyn StatusIndicator>,
    ) -> ClickAction {
        match click {
            Click::Secondary => ClickAction::Terminate,
            Click::Primary => {
                if let Err(err) = self.toggle() {
                    log::warn!("{}", err);
                }
                self.refresh_indicator(status);
                ClickAction::Continue
            }
        }
    }

    /// Switch to the other resolution. Returns the resolution switched to.
    pub fn toggle(&mut self) -> Result<Resolution, ToggleError> {
        self.cancel_pending_rewarp();

        let current = self
            .display
            .current_mode()
            .ok_or(ToggleError::NoCurrentMode)?
            .resolution();
        let target = self.config.table.target_for(current);
        log::debug!("Toggling {} -> {}", current, target);

        self.switch_to(target)?;
        Ok(target)
    }

    /// Apply the display mode matching `target`, moving the cursor along.
    pub fn switch_to(&mut self, target: Resolution) -> Result<(), ToggleError> {
        let modes = self
            .display
            .all_modes()
            .ok_or(ToggleError::ModeListUnavailable)?;

        let Some(mode) = mode::select_mode(&modes, target) else {
            match serde_json::to_string(&mode::summarize_modes(&modes)) {
                Ok(json) => log::info!("Available modes: {}", json),
                Err(e) => log::debug!("Failed to serialize mode list: {}", e),
            }
            self.alerts
                .show_warning(UNAVAILABLE_TITLE, &unavailable_message(target));
            return Err(ToggleError::ModeUnavailable(target));
        };
        log::debug!(
            "Selected {} mode for {} ({} px wide)",
            if mode.is_hidpi() { "HiDPI" } else { "standard" },
            target,
            mode.pixel_width()
        );

        let warp_to = if self.config.preserve_cursor {
            let point = cursor::plan_warp(&*self.cursor, target);
            cursor::freeze(&*self.cursor);
            Some(point)
        } else {
            None
        };

        let result = transaction::apply_mode(&self.display, mode, self.config.configure_option);

        if let Some(point) = warp_to {
            let applied = match &result {
                Ok(()) => true,
                Err(err) => err.may_have_applied(),
            };
            if applied {
                self.settle_cursor(point);
            } else {
                cursor::release(&*self.cursor);
            }
        }

        if result.is_ok() {
            log::info!("Display set to {}", target);
        }
        result
    }

    /// Glyph for the display's current state, if the mode can be read.
    pub fn current_glyph(&self) -> Option<StatusGlyph> {
        let mode = self.display.current_mode()?;
        let state = self.config.table.state_of(mode.resolution());
        Some(StatusGlyph::for_state(state))
    }

    pub fn refresh_indicator(&self, status: Option<&dyn StatusIndicator>) {
        let Some(status) = status else {
            return;
        };
        if let Some(glyph) = self.current_glyph() {
            status.set_glyph(glyph);
        }
    }

    pub fn has_pending_rewarp(&self) -> bool {
        self.pending_rewarp.is_some()
    }

    /// Warp now, then again once the display has settled, then give the
    /// cursor back to the mouse.
    fn settle_cursor(&mut self, point: Point) {
        cursor::warp(&*self.cursor, point);

        let handle = Rc::clone(&self.cursor);
        let task = self.scheduler.schedule_once(
            self.config.rewarp_delay,
            Box::new(move || {
                cursor::warp(&*handle, point);
                cursor::release(&*handle);
            }),
        );
        self.pending_rewarp = Some(task);
    }

    fn cancel_pending_rewarp(&mut self) {
        if let Some(mut task) = self.pending_rewarp.take() {
            if task.cancel() {
                log::debug!("Cancelled pending cursor re-warp");
                cursor::release(&*self.cursor);
            }
        }
    }
}
