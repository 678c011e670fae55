//! API Layer
//!
//! HTTP communication with the external temperature server.

pub mod client;

pub use client::{fetch_temperature, get_api_base, submit_reading, TemperatureResponse};
