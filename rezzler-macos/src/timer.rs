use std::cell::{Cell, RefCell};
use std::ptr::NonNull;
use std::rc::Rc;
use std::time::Duration;

use block2::RcBlock;
use objc2::rc::Retained;
use objc2_foundation::NSTimer;

use rezzler_core::schedule::{ScheduledTask, Scheduler};

/// Schedules work as one-shot NSTimers on the main run loop.
pub struct RunLoopScheduler;

struct TimerTask {
    timer: Retained<NSTimer>,
    fired: Rc<Cell<bool>>,
}

impl ScheduledTask for TimerTask {
    fn cancel(&mut self) -> bool {
        if self.fired.get() {
            return false;
        }
        self.timer.invalidate();
        true
    }
}

impl Scheduler for RunLoopScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask> {
        let fired = Rc::new(Cell::new(false));
        let slot = RefCell::new(Some(task));
        let flag = Rc::clone(&fired);
        let block = RcBlock::new(move |_timer: NonNull<NSTimer>| {
            let task = slot.borrow_mut().take();
            if let Some(task) = task {
                flag.set(true);
                task();
            }
        });
        let timer = unsafe {
            NSTimer::scheduledTimerWithTimeInterval_repeats_block(delay.as_secs_f64(), false, &block)
        };
        Box::new(TimerTask { timer, fired })
    }
}
