//! Notification Surface
//!
//! One slot, last writer wins. A newer message replaces whatever is shown;
//! nothing is queued.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// How long a notification stays up unless dismissed earlier
pub const AUTO_HIDE: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    /// Bumped on every `show`, lets a pending auto-hide recognise that its
    /// notification has been replaced
    pub generation: u64,
}

impl NotificationState {
    /// Replace the current notification, returning its generation
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.message = message.into();
        self.severity = severity;
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Auto-hide: only dismisses if `generation` is still the one on screen
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

/// Sink for user-visible outcome messages
pub trait Notify {
    fn notify(&self, message: String, severity: Severity);

    fn success(&self, message: String) {
        self.notify(message, Severity::Success);
    }

    fn error(&self, message: String) {
        self.notify(message, Severity::Error);
    }
}

impl Notify for RefCell<NotificationState> {
    fn notify(&self, message: String, severity: Severity) {
        self.borrow_mut().show(message, severity);
    }
}

impl<N: Notify + ?Sized> Notify for &N {
    fn notify(&self, message: String, severity: Severity) {
        (**self).notify(message, severity);
    }
}

impl<N: Notify + ?Sized> Notify for Rc<N> {
    fn notify(&self, message: String, severity: Severity) {
        (**self).notify(message, severity);
    }
}
