//! Global Application State
//!
//! Reactive state shared across pages using Leptos signals.

use leptos::*;

use crate::booking::Notice;

/// How long a notification stays up before it clears itself.
const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Currently visible notification, if any
    pub notice: RwSignal<Option<Notice>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notification (auto-clears after the timeout).
    ///
    /// A newer notice simply overwrites the current one; the pending timer
    /// of the superseded notice is left to fire and clear whatever is
    /// visible at that point.
    pub fn show_notice(&self, notice: Notice) {
        self.notice.set(Some(notice));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notice_signal.set(None);
        })
        .forget();
    }

    /// Show a success message (auto-clears after the timeout)
    pub fn show_success(&self, message: &str) {
        self.show_notice(Notice::success(message));
    }

    /// Show an error message (auto-clears after the timeout)
    pub fn show_error(&self, message: &str) {
        self.show_notice(Notice::error(message));
    }

    /// Hide the current notification immediately
    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}
