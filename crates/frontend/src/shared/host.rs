//! Browser services the controllers need: dialogs, toasts, timers and task
//! spawning.

use crate::layout::notifications::{NotificationCenter, NotificationKind};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::Pin;

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

pub trait Host: Clone + 'static {
    /// Blocking yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Blocking warning with a title and an explanation
    fn warn(&self, title: &str, text: &str);

    /// Transient toast
    fn notify(&self, kind: NotificationKind, message: String);

    fn sleep(&self, ms: u32) -> LocalTask;

    /// Run a task on the UI thread without awaiting it
    fn spawn(&self, task: LocalTask);
}

/// [`Host`] backed by `window` dialogs, the toast stack and browser timers
#[derive(Clone, Copy)]
pub struct WebHost {
    notifications: NotificationCenter,
}

impl WebHost {
    pub fn new(notifications: NotificationCenter) -> Self {
        Self { notifications }
    }
}

impl Host for WebHost {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn warn(&self, title: &str, text: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("{}\n\n{}", title, text));
        }
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        self.notifications.show(kind, message);
    }

    fn sleep(&self, ms: u32) -> LocalTask {
        Box::pin(TimeoutFuture::new(ms))
    }

    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Current `navigator.onLine`; unknown counts as online
pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

/// Warn once at start-up when the browser reports no connectivity
pub fn warn_if_offline<H: Host>(host: &H, online: bool) {
    if !online {
        log::warn!("Browser reports offline at start-up");
        host.warn(
            "Weak internet connection",
            "Some features may not work correctly",
        );
    }
}
