// ---------------------------------------------------------------------------
// macOS Application Lifecycle
// ---------------------------------------------------------------------------
//
// NSApplication runs as an accessory (no Dock icon, no windows). The
// delegate owns the status item and the toggler:
//
// - applicationDidFinishLaunching: create the status item, bind left and
//   right mouse-up to handleClick:, show the initial glyph
// - handleClick: right-click terminates, left-click toggles the resolution
//   and refreshes the glyph
// ---------------------------------------------------------------------------

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, ProtocolObject};
use objc2::{define_class, msg_send, sel, MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate, NSEventMask,
    NSEventType, NSStatusBar, NSStatusItem, NSVariableStatusItemLength,
};
use objc2_foundation::{NSNotification, NSObject, NSObjectProtocol};

use rezzler_core::indicator::StatusIndicator;
use rezzler_core::{Click, ClickAction, DisplayResolutionToggler, TogglerConfig};

use crate::alert::ModalAlerts;
use crate::cursor::SystemCursor;
use crate::display::MainDisplay;
use crate::status_item::StatusButton;
use crate::timer::RunLoopScheduler;

type Toggler = DisplayResolutionToggler<MainDisplay>;

#[derive(Default)]
pub struct AppDelegateIvars {
    status_item: OnceCell<Retained<NSStatusItem>>,
    toggler: OnceCell<RefCell<Toggler>>,
}

define_class!(
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "RezzlerAppDelegate"]
    #[ivars = AppDelegateIvars]
    pub struct AppDelegate;

    unsafe impl NSObjectProtocol for AppDelegate {}

    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn did_finish_launching(&self, _notification: &NSNotification) {
            self.setup_status_item();
        }
    }

    impl AppDelegate {
        #[unsafe(method(handleClick:))]
        fn handle_click(&self, _sender: Option<&AnyObject>) {
            self.on_click();
        }
    }
);

impl AppDelegate {
    pub fn new(mtm: MainThreadMarker) -> Retained<Self> {
        let this = Self::alloc(mtm).set_ivars(AppDelegateIvars::default());
        unsafe { msg_send![super(this), init] }
    }

    fn setup_status_item(&self) {
        let mtm = self.mtm();

        let status_bar = NSStatusBar::systemStatusBar();
        let item = status_bar.statusItemWithLength(NSVariableStatusItemLength);

        if let Some(button) = item.button(mtm) {
            let target: &AnyObject = self;
            unsafe {
                button.setTarget(Some(target));
                button.setAction(Some(sel!(handleClick:)));
                button.sendActionOn(NSEventMask::LeftMouseUp | NSEventMask::RightMouseUp);
            }
        } else {
            log::warn!("Status item has no button; clicks will not be delivered");
        }

        let toggler = DisplayResolutionToggler::new(
            MainDisplay,
            Rc::new(SystemCursor::new(mtm)),
            Box::new(RunLoopScheduler),
            Box::new(ModalAlerts::new(mtm)),
            TogglerConfig::default(),
        );

        let _ = self.ivars().status_item.set(item);
        let _ = self.ivars().toggler.set(RefCell::new(toggler));
        self.refresh_icon();
    }

    fn status_button(&self) -> Option<StatusButton> {
        let item = self.ivars().status_item.get()?;
        item.button(self.mtm()).map(StatusButton::new)
    }

    fn refresh_icon(&self) {
        let Some(toggler) = self.ivars().toggler.get() else {
            return;
        };
        let button = self.status_button();
        toggler
            .borrow()
            .refresh_indicator(button.as_ref().map(|b| b as &dyn StatusIndicator));
    }

    fn on_click(&self) {
        let app = NSApplication::sharedApplication(self.mtm());
        let Some(event) = app.currentEvent() else {
            return;
        };
        let click = if event.r#type() == NSEventType::RightMouseUp {
            Click::Secondary
        } else {
            Click::Primary
        };

        let Some(toggler) = self.ivars().toggler.get() else {
            return;
        };
        // The alert runs a nested modal loop; ignore clicks that land there.
        let Ok(mut toggler) = toggler.try_borrow_mut() else {
            log::debug!("Toggle already in progress, ignoring click");
            return;
        };

        let button = self.status_button();
        let action = toggler.handle_click(click, button.as_ref().map(|b| b as &dyn StatusIndicator));
        drop(toggler);

        if action == ClickAction::Terminate {
            log::info!("Quitting");
            app.terminate(None);
        }
    }
}

/// Start the menu-bar app. Does not return until the app terminates.
pub fn run() {
    let mtm = MainThreadMarker::new().expect("must run on the main thread");

    let app = NSApplication::sharedApplication(mtm);
    app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);

    let delegate = AppDelegate::new(mtm);
    app.setDelegate(Some(ProtocolObject::from_ref(&*delegate)));

    // NSApplication only holds its delegate weakly.
    app.run();
    drop(delegate);
}
