use serde::Serialize;

use crate::resolution::Resolution;

/// A mode reported by the display service.
///
/// Sizes are in logical points except `pixel_width`, which is the
/// backing-store width used to tell HiDPI variants apart.
pub trait DisplayMode {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_width(&self) -> u32;

    fn resolution(&self) -> Resolution {
        Resolution::new(self.width(), self.height())
    }

    fn is_hidpi(&self) -> bool {
        self.pixel_width() > self.width()
    }
}

/// Pick the mode matching `target`, preferring a HiDPI variant.
pub fn select_mode<M: DisplayMode>(modes: &[M], target: Resolution) -> Option<&M> {
    modes
        .iter()
        .find(|mode| mode.resolution() == target && mode.is_hidpi())
        .or_else(|| modes.iter().find(|mode| mode.resolution() == target))
}

/// Loggable snapshot of a mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeSummary {
    pub width: u32,
    pub height: u32,
    pub pixel_width: u32,
    pub hidpi: bool,
}

impl ModeSummary {
    pub fn of<M: DisplayMode>(mode: &M) -> Self {
        ModeSummary {
            width: mode.width(),
            height: mode.height(),
            pixel_width: mode.pixel_width(),
            hidpi: mode.is_hidpi(),
        }
    }
}

/// Deduplicated list of the modes a display offers, for diagnostics.
pub fn summarize_modes<M: DisplayMode>(modes: &[M]) -> Vec<ModeSummary> {
    let mut summaries: Vec<ModeSummary> = Vec::new();
    for mode in modes {
        let summary = ModeSummary::of(mode);
        if !summaries.contains(&summary) {
            summaries.push(summary);
        }
    }
    summaries.sort_by(|a, b| {
        (a.width, a.height, a.pixel_width).cmp(&(b.width, b.height, b.pixel_width))
    });
    summaries
}
