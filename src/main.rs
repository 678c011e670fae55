//! Thermowatch Dashboard
//!
//! Live temperature monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - 1-second polling of the temperature endpoint
//! - Current reading with Celsius/Fahrenheit toggle
//! - Min/max/avg statistics and a history chart
//! - Manual reading submission
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with an external temperature server over
//! HTTP; the server owns data retention and the `/api/temperature` contract.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod poll;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
