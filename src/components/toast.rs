//! Toast Notification Component
//!
//! Shows the current transient notice with its severity styling.

use leptos::*;

use crate::booking::{Notice, Severity};
use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50">
            {move || {
                state.notice.get().map(|notice| view! {
                    <ToastMessage notice=notice />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (icon, bg_class) = match notice.severity {
        Severity::Success => ("✓", "bg-green-600"),
        Severity::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message}</span>
            <button
                on:click=move |_| state.dismiss_notice()
                class="pl-2 text-white/70 hover:text-white"
            >
                "✕"
            </button>
        </div>
    }
}
