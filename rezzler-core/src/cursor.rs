use crate::error::OsStatus;
use crate::resolution::Resolution;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Screen rectangle with a bottom-left origin, as AppKit reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            origin: Point::new(x, y),
            width,
            height,
        }
    }
}

/// Pointer and cursor control.
///
/// `location` and `screen_frame` use the bottom-left origin of the window
/// system; `warp` takes a top-left origin point in display space.
pub trait CursorControl {
    fn location(&self) -> Point;
    fn screen_frame(&self) -> Option<Rect>;
    fn warp(&self, to: Point) -> Result<(), OsStatus>;
    /// Couple (`true`) or decouple (`false`) hardware pointer movement and
    /// the displayed cursor.
    fn set_associated(&self, associated: bool) -> Result<(), OsStatus>;
    fn hide(&self) -> Result<(), OsStatus>;
    fn show(&self) -> Result<(), OsStatus>;
}

/// Cursor position as fractions of the screen, y measured from the bottom.
/// Both components are clamped to `[0, 1]`; an empty frame yields `0.0`.
pub fn relative_position(cursor: Point, frame: Rect) -> (f64, f64) {
    fn fraction(offset: f64, extent: f64) -> f64 {
        if extent > 0.0 {
            (offset / extent).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
    (
        fraction(cursor.x - frame.origin.x, frame.width),
        fraction(cursor.y - frame.origin.y, frame.height),
    )
}

/// Absolute top-left origin point for a relative position in `resolution`.
pub fn warp_target(relative: (f64, f64), resolution: Resolution) -> Point {
    let (rx, ry) = relative;
    Point::new(
        rx * f64::from(resolution.width),
        (1.0 - ry) * f64::from(resolution.height),
    )
}

/// Where to put the cursor after switching to `target`.
pub fn plan_warp<C: CursorControl + ?Sized>(cursor: &C, target: Resolution) -> Point {
    let location = cursor.location();
    let frame = cursor.screen_frame().unwrap_or_default();
    let relative = relative_position(location, frame);
    let point = warp_target(relative, target);
    log::debug!(
        "Cursor at ({:.1}, {:.1}) in {}x{} -> ({:.1}, {:.1}) in {}",
        location.x,
        location.y,
        frame.width,
        frame.height,
        point.x,
        point.y,
        target
    );
    point
}

/// Hide the cursor and stop it following the mouse until [`release`].
pub fn freeze<C: CursorControl + ?Sized>(cursor: &C) {
    if let Err(code) = cursor.hide() {
        log::debug!("Failed to hide cursor: {}", code);
    }
    if let Err(code) = cursor.set_associated(false) {
        log::debug!("Failed to decouple mouse from cursor: {}", code);
    }
}

/// Undo [`freeze`].
pub fn release<C: CursorControl + ?Sized>(cursor: &C) {
    if let Err(code) = cursor.set_associated(true) {
        log::debug!("Failed to recouple mouse and cursor: {}", code);
    }
    if let Err(code) = cursor.show() {
        log::debug!("Failed to show cursor: {}", code);
    }
}

pub fn warp<C: CursorControl + ?Sized>(cursor: &C, to: Point) {
    if let Err(code) = cursor.warp(to) {
        log::debug!("Failed to warp cursor to ({:.1}, {:.1}): {}", to.x, to.y, code);
    }
}
