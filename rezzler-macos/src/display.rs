use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;
use core_graphics::display::{CGConfigureOption, CGDisplay, CGDisplayConfigRef, CGDisplayMode};

use rezzler_core::display::{ConfigureOption, DisplayService};
use rezzler_core::error::OsStatus;
use rezzler_core::mode::DisplayMode;

/// Value of the CoreGraphics constant of the same name.
const SHOW_DUPLICATE_LOW_RESOLUTION_MODES: &str = "kCGDisplayShowDuplicateLowResolutionModes";

/// A CoreGraphics display mode.
pub struct CgMode(CGDisplayMode);

impl DisplayMode for CgMode {
    fn width(&self) -> u32 {
        self.0.width() as u32
    }

    fn height(&self) -> u32 {
        self.0.height() as u32
    }

    fn pixel_width(&self) -> u32 {
        self.0.pixel_width() as u32
    }
}

/// Whichever display is currently the main one.
pub struct MainDisplay;

impl DisplayService for MainDisplay {
    type Mode = CgMode;
    type Config = CGDisplayConfigRef;

    fn current_mode(&self) -> Option<CgMode> {
        CGDisplay::main().display_mode().map(CgMode)
    }

    fn all_modes(&self) -> Option<Vec<CgMode>> {
        let options = CFDictionary::from_CFType_pairs(&[(
            CFString::from_static_string(SHOW_DUPLICATE_LOW_RESOLUTION_MODES),
            CFBoolean::true_value(),
        )]);
        let modes = CGDisplayMode::all_display_modes(
            CGDisplay::main().id,
            options.as_concrete_TypeRef(),
        )?;
        Some(modes.into_iter().map(CgMode).collect())
    }

    fn begin_configuration(&self) -> Result<CGDisplayConfigRef, OsStatus> {
        CGDisplay::main().begin_configuration()
    }

    fn configure_mode(&self, config: &CGDisplayConfigRef, mode: &CgMode) -> Result<(), OsStatus> {
        CGDisplay::main().configure_display_with_display_mode(config, &mode.0)
    }

    fn cancel_configuration(&self, config: CGDisplayConfigRef) -> Result<(), OsStatus> {
        CGDisplay::main().cancel_configuration(&config)
    }

    fn complete_configuration(
        &self,
        config: CGDisplayConfigRef,
        option: ConfigureOption,
    ) -> Result<(), OsStatus> {
        let option = match option {
            ConfigureOption::ForAppOnly => CGConfigureOption::ConfigureForAppOnly,
            ConfigureOption::ForSession => CGConfigureOption::ConfigureForSession,
            ConfigureOption::Permanently => CGConfigureOption::ConfigurePermanently,
        };
        CGDisplay::main().complete_configuration(&config, option)
    }
}
