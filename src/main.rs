//! MediBook
//!
//! Clinic appointment-booking front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Appointment scheduling over a mocked provider and time-slot catalog
//! - Login and registration form shells
//! - Transient toast notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state is browser-local and reactive; there is no backend
//! and nothing persists across a page reload.

use leptos::*;

mod app;
mod booking;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
