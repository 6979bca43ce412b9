//! Converse
//!
//! Chat assistant frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing shell with login and signup
//! - Chat dashboard with resumable conversation history
//! - Optional browser speech-to-text input
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every chat exchange is proxied to a local HTTP backend; the
//! client owns only UI state and the conversation transcript.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
