use serde::Serialize;
use std::fmt;

/// A display size in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The smaller of the two shipped resolutions.
pub const LOW: Resolution = Resolution::new(1470, 956);
/// The larger of the two shipped resolutions.
pub const HIGH: Resolution = Resolution::new(1710, 1112);

/// Which end of the table the display currently sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Low,
    High,
}

/// Ordered list of resolutions the toggler cycles through.
///
/// The last entry is the "high" resolution. A size that is not in the
/// table counts as sitting at the first entry, so with two entries any
/// unknown mode toggles to the high resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionTable {
    entries: Vec<Resolution>,
}

impl Default for ResolutionTable {
    fn default() -> Self {
        ResolutionTable {
            entries: vec![LOW, HIGH],
        }
    }
}

impl ResolutionTable {
    pub fn new(entries: Vec<Resolution>) -> Result<Self, String> {
        if entries.len() < 2 {
            return Err(format!(
                "Resolution table needs at least two entries, got {}",
                entries.len()
            ));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].contains(entry) {
                return Err(format!("Duplicate resolution in table: {}", entry));
            }
        }
        Ok(ResolutionTable { entries })
    }

    pub fn entries(&self) -> &[Resolution] {
        &self.entries
    }

    pub fn high(&self) -> Resolution {
        // `new` guarantees at least two entries.
        self.entries[self.entries.len() - 1]
    }

    /// The resolution to switch to from `current`.
    pub fn target_for(&self, current: Resolution) -> Resolution {
        let index = self
            .entries
            .iter()
            .position(|entry| *entry == current)
            .unwrap_or(0);
        self.entries[(index + 1) % self.entries.len()]
    }

    pub fn state_of(&self, current: Resolution) -> ToggleState {
        if current == self.high() {
            ToggleState::High
        } else {
            ToggleState::Low
        }
    }
}
