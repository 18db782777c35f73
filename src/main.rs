//! Home Memories
//!
//! A home-design showcase built with Leptos (WASM).
//!
//! # Features
//!
//! - Page navigation between home, rooms, per-room detail views, and
//!   the wish list
//! - Before/after timeline slider on every detail page
//! - Move-in countdown progress ring
//! - Editable wish cards with a create/edit modal
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that
//! compiles to WebAssembly. There is no server and no persistence;
//! all state lives in signals and resets on reload.

use leptos::*;

mod app;
mod color;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });

    web_sys::console::log_1(&"Home Memories app initialized".into());
}
