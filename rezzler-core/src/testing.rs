//! Recording fakes for the OS collaborators, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::cursor::{CursorControl, Point, Rect};
use crate::display::{ConfigureOption, DisplayService};
use crate::error::OsStatus;
use crate::indicator::{StatusGlyph, StatusIndicator};
use crate::mode::DisplayMode;
use crate::schedule::{ScheduledTask, Scheduler};
use crate::toggler::AlertPresenter;

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeMode {
    pub width: u32,
    pub height: u32,
    pub pixel_width: u32,
}

impl FakeMode {
    pub fn standard(width: u32, height: u32) -> Self {
        FakeMode {
            width,
            height,
            pixel_width: width,
        }
    }

    pub fn hidpi(width: u32, height: u32) -> Self {
        FakeMode {
            width,
            height,
            pixel_width: width * 2,
        }
    }
}

impl DisplayMode for FakeMode {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_width(&self) -> u32 {
        self.pixel_width
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Begin,
    Configure(FakeMode),
    Cancel,
    Complete(ConfigureOption),
}

pub struct FakeDisplay {
    current: RefCell<Option<FakeMode>>,
    modes: RefCell<Option<Vec<FakeMode>>>,
    staged: RefCell<Option<FakeMode>>,
    calls: RefCell<Vec<DisplayCall>>,
    begin_error: Cell<Option<OsStatus>>,
    configure_error: Cell<Option<OsStatus>>,
    complete_error: Cell<Option<OsStatus>>,
}

impl FakeDisplay {
    pub fn new(current: FakeMode, modes: Vec<FakeMode>) -> Self {
        FakeDisplay {
            current: RefCell::new(Some(current)),
            modes: RefCell::new(Some(modes)),
            staged: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            begin_error: Cell::new(None),
            configure_error: Cell::new(None),
            complete_error: Cell::new(None),
        }
    }

    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.borrow().clone()
    }

    pub fn current_mode_now(&self) -> FakeMode {
        self.current.borrow().clone().expect("no current mode")
    }

    pub fn set_current(&self, mode: Option<FakeMode>) {
        *self.current.borrow_mut() = mode;
    }

    pub fn set_modes(&self, modes: Option<Vec<FakeMode>>) {
        *self.modes.borrow_mut() = modes;
    }

    pub fn fail_begin(&self, code: OsStatus) {
        self.begin_error.set(Some(code));
    }

    pub fn fail_configure(&self, code: OsStatus) {
        self.configure_error.set(Some(code));
    }

    pub fn fail_complete(&self, code: OsStatus) {
        self.complete_error.set(Some(code));
    }
}

impl DisplayService for FakeDisplay {
    type Mode = FakeMode;
    type Config = ();

    fn current_mode(&self) -> Option<FakeMode> {
        self.current.borrow().clone()
    }

    fn all_modes(&self) -> Option<Vec<FakeMode>> {
        self.modes.borrow().clone()
    }

    fn begin_configuration(&self) -> Result<(), OsStatus> {
        self.calls.borrow_mut().push(DisplayCall::Begin);
        match self.begin_error.get() {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }

    fn configure_mode(&self, _config: &(), mode: &FakeMode) -> Result<(), OsStatus> {
        self.calls
            .borrow_mut()
            .push(DisplayCall::Configure(mode.clone()));
        if let Some(code) = self.configure_error.get() {
            return Err(code);
        }
        *self.staged.borrow_mut() = Some(mode.clone());
        Ok(())
    }

    fn cancel_configuration(&self, _config: ()) -> Result<(), OsStatus> {
        self.calls.borrow_mut().push(DisplayCall::Cancel);
        *self.staged.borrow_mut() = None;
        Ok(())
    }

    fn complete_configuration(&self, _config: (), option: ConfigureOption) -> Result<(), OsStatus> {
        self.calls.borrow_mut().push(DisplayCall::Complete(option));
        let staged = self.staged.borrow_mut().take();
        if let Some(code) = self.complete_error.get() {
            return Err(code);
        }
        if let Some(mode) = staged {
            *self.current.borrow_mut() = Some(mode);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum CursorCall {
    Warp(Point),
    Associate(bool),
    Hide,
    Show,
}

pub struct FakeCursor {
    location: Point,
    frame: Option<Rect>,
    calls: RefCell<Vec<CursorCall>>,
    hide_depth: Cell<i32>,
    associated: Cell<bool>,
}

impl FakeCursor {
    pub fn new(location: Point, frame: Option<Rect>) -> Self {
        FakeCursor {
            location,
            frame,
            calls: RefCell::new(Vec::new()),
            hide_depth: Cell::new(0),
            associated: Cell::new(true),
        }
    }

    pub fn calls(&self) -> Vec<CursorCall> {
        self.calls.borrow().clone()
    }

    pub fn warps(&self) -> Vec<Point> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                CursorCall::Warp(point) => Some(*point),
                _ => None,
            })
            .collect()
    }

    /// Outstanding hides; the OS only shows the cursor again at zero.
    pub fn hide_depth(&self) -> i32 {
        self.hide_depth.get()
    }

    pub fn is_visible(&self) -> bool {
        self.hide_depth.get() <= 0
    }

    pub fn is_associated(&self) -> bool {
        self.associated.get()
    }
}

impl CursorControl for FakeCursor {
    fn location(&self) -> Point {
        self.location
    }

    fn screen_frame(&self) -> Option<Rect> {
        self.frame
    }

    fn warp(&self, to: Point) -> Result<(), OsStatus> {
        self.calls.borrow_mut().push(CursorCall::Warp(to));
        Ok(())
    }

    fn set_associated(&self, associated: bool) -> Result<(), OsStatus> {
        self.calls
            .borrow_mut()
            .push(CursorCall::Associate(associated));
        self.associated.set(associated);
        Ok(())
    }

    fn hide(&self) -> Result<(), OsStatus> {
        self.calls.borrow_mut().push(CursorCall::Hide);
        self.hide_depth.set(self.hide_depth.get() + 1);
        Ok(())
    }

    fn show(&self) -> Result<(), OsStatus> {
        self.calls.borrow_mut().push(CursorCall::Show);
        self.hide_depth.set(self.hide_depth.get() - 1);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Pending,
    Ran,
    Cancelled,
}

struct QueuedTask {
    delay: Duration,
    task: Option<Box<dyn FnOnce()>>,
    state: Rc<Cell<TaskState>>,
}

/// Queues tasks until `run_pending` is called; time never passes on its own.
#[derive(Clone, Default)]
pub struct FakeScheduler {
    queue: Rc<RefCell<Vec<QueuedTask>>>,
}

impl FakeScheduler {
    /// Delays of every task ever scheduled, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|queued| queued.delay).collect()
    }

    /// Run every task that has not been cancelled. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let due: Vec<Box<dyn FnOnce()>> = self
            .queue
            .borrow_mut()
            .iter_mut()
            .filter(|queued| queued.state.get() == TaskState::Pending)
            .filter_map(|queued| {
                queued.state.set(TaskState::Ran);
                queued.task.take()
            })
            .collect();
        let count = due.len();
        for task in due {
            task();
        }
        count
    }
}

struct FakeTask {
    state: Rc<Cell<TaskState>>,
}

impl ScheduledTask for FakeTask {
    fn cancel(&mut self) -> bool {
        if self.state.get() == TaskState::Pending {
            self.state.set(TaskState::Cancelled);
            true
        } else {
            false
        }
    }
}

impl Scheduler for FakeScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask> {
        let state = Rc::new(Cell::new(TaskState::Pending));
        self.queue.borrow_mut().push(QueuedTask {
            delay,
            task: Some(task),
            state: Rc::clone(&state),
        });
        Box::new(FakeTask { state })
    }
}

// ---------------------------------------------------------------------------
// Alerts and status item
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct RecordingAlerts {
    shown: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingAlerts {
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.borrow().clone()
    }
}

impl AlertPresenter for RecordingAlerts {
    fn show_warning(&self, title: &str, message: &str) {
        self.shown
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingIndicator {
    glyphs: RefCell<Vec<StatusGlyph>>,
}

impl RecordingIndicator {
    pub fn glyphs(&self) -> Vec<StatusGlyph> {
        self.glyphs.borrow().clone()
    }
}

impl StatusIndicator for RecordingIndicator {
    fn set_glyph(&self, glyph: StatusGlyph) {
        self.glyphs.borrow_mut().push(glyph);
    }
}
