//! Farmunity Web Client
//!
//! Farmer-facing marketplace frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Crop marketplace with live market prices
//! - Equipment rental with certification badges
//! - Knowledge hub: AI assistant, community forum, weather advisory
//! - Buyer/seller messaging
//! - Role-gated farmer/admin dashboards
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It talks to the Farmunity REST API over HTTP and keeps
//! no state beyond the cached auth blob in local storage.

use leptos::*;

use app::App;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod util;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <App /> });
}
