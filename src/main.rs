//! Portfolio
//!
//! Single-page personal portfolio, compiled to WebAssembly.
//!
//! # Features
//! - Scroll-synced section navigation with smooth scrolling
//! - Profile, skills, achievements and project sections backed by a REST API
//! - Contact form with a full submit lifecycle
//!
//! # Architecture
//! Client-side rendered Leptos application. Every data-backed section runs
//! one fetch when it mounts and falls back to static or empty content when
//! the backend is unreachable; a failed request never breaks the page.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
