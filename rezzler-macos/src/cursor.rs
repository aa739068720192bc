use core_graphics::display::CGDisplay;
use core_graphics::geometry::CGPoint;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSEvent, NSScreen};

use rezzler_core::cursor::{CursorControl, Point, Rect};
use rezzler_core::error::OsStatus;

/// The system cursor. AppKit supplies positions, CoreGraphics moves it.
pub struct SystemCursor {
    mtm: MainThreadMarker,
}

impl SystemCursor {
    pub fn new(mtm: MainThreadMarker) -> Self {
        SystemCursor { mtm }
    }
}

impl CursorControl for SystemCursor {
    fn location(&self) -> Point {
        let location = NSEvent::mouseLocation();
        Point::new(location.x, location.y)
    }

    fn screen_frame(&self) -> Option<Rect> {
        let screen = NSScreen::mainScreen(self.mtm)?;
        let frame = screen.frame();
        Some(Rect::new(
            frame.origin.x,
            frame.origin.y,
            frame.size.width,
            frame.size.height,
        ))
    }

    fn warp(&self, to: Point) -> Result<(), OsStatus> {
        CGDisplay::warp_mouse_cursor_position(CGPoint::new(to.x, to.y))
    }

    fn set_associated(&self, associated: bool) -> Result<(), OsStatus> {
        CGDisplay::associate_mouse_and_mouse_cursor_position(associated)
    }

    fn hide(&self) -> Result<(), OsStatus> {
        CGDisplay::main().hide_cursor()
    }

    fn show(&self) -> Result<(), OsStatus> {
        CGDisplay::main().show_cursor()
    }
}
