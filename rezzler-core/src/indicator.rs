use crate::resolution::ToggleState;

/// Symbol shown in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGlyph {
    ZoomIn,
    ZoomOut,
}

impl StatusGlyph {
    /// At the high resolution the next click zooms in.
    pub fn for_state(state: ToggleState) -> Self {
        match state {
            ToggleState::High => StatusGlyph::ZoomIn,
            ToggleState::Low => StatusGlyph::ZoomOut,
        }
    }

    /// SF Symbols name.
    pub fn symbol_name(self) -> &'static str {
        match self {
            StatusGlyph::ZoomIn => "plus.magnifyingglass",
            StatusGlyph::ZoomOut => "minus.magnifyingglass",
        }
    }

    pub fn accessibility_description(self) -> &'static str {
        match self {
            StatusGlyph::ZoomIn => "Zoom In",
            StatusGlyph::ZoomOut => "Zoom Out",
        }
    }
}

/// The menu-bar item the glyph is drawn into.
pub trait StatusIndicator {
    fn set_glyph(&self, glyph: StatusGlyph);
}
