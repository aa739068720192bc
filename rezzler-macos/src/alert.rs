use objc2::MainThreadMarker;
use objc2_app_kit::{NSAlert, NSAlertStyle};
use objc2_foundation::NSString;

use rezzler_core::toggler::AlertPresenter;

/// Blocking NSAlert.
pub struct ModalAlerts {
    mtm: MainThreadMarker,
}

impl ModalAlerts {
    pub fn new(mtm: MainThreadMarker) -> Self {
        ModalAlerts { mtm }
    }
}

impl AlertPresenter for ModalAlerts {
    fn show_warning(&self, title: &str, message: &str) {
        let alert = NSAlert::new(self.mtm);
        alert.setMessageText(&NSString::from_str(title));
        alert.setInformativeText(&NSString::from_str(message));
        alert.setAlertStyle(NSAlertStyle::Warning);
        alert.addButtonWithTitle(&NSString::from_str("OK"));
        alert.runModal();
    }
}
