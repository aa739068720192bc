use objc2::rc::Retained;
use objc2_app_kit::{NSImage, NSStatusBarButton};
use objc2_foundation::NSString;

use rezzler_core::indicator::{StatusGlyph, StatusIndicator};

/// Button of the menu-bar status item.
pub struct StatusButton {
    button: Retained<NSStatusBarButton>,
}

impl StatusButton {
    pub fn new(button: Retained<NSStatusBarButton>) -> Self {
        StatusButton { button }
    }
}

impl StatusIndicator for StatusButton {
    fn set_glyph(&self, glyph: StatusGlyph) {
        let name = NSString::from_str(glyph.symbol_name());
        let description = NSString::from_str(glyph.accessibility_description());
        match NSImage::imageWithSystemSymbolName_accessibilityDescription(&name, Some(&description)) {
            Some(image) => self.button.setImage(Some(&image)),
            None => log::warn!("System symbol {} not found", glyph.symbol_name()),
        }
    }
}
