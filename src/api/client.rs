//! HTTP API Client
//!
//! Functions for communicating with the temperature server. The server is
//! external: it owns data retention and the `/api/temperature` contract.

use gloo_net::http::Request;

use crate::state::global::{Reading, Stats};

/// Default API base URL (same origin)
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "thermowatch_api_url";

/// Get the API base URL from local storage or use the same-origin default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// One poll's worth of data from `GET /api/temperature`.
///
/// `current` is absent while the server has collected no readings yet;
/// that is a valid state, distinct from a transport error.
#[derive(Debug, Default, serde::Deserialize)]
pub struct TemperatureResponse {
    #[serde(default)]
    pub current: Option<Reading>,
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub history: Option<Vec<Reading>>,
}

#[derive(Debug, serde::Deserialize)]
struct SubmitAck {
    status: String,
}

impl SubmitAck {
    fn accepted(&self) -> bool {
        self.status == "success"
    }
}

// ============ API Functions ============

/// Fetch the current reading, statistics, and history
pub async fn fetch_temperature() -> Result<TemperatureResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/temperature", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a temperature reading (Celsius) to the server.
///
/// Returns `true` only when the server acknowledges the reading; every
/// transport or decode failure is caught and reported as `false`.
pub async fn submit_reading(temperature: f64) -> bool {
    match try_submit(temperature).await {
        Ok(ack) => ack.accepted(),
        Err(e) => {
            web_sys::console::error_1(
                &format!("Error sending temperature reading: {}", e).into(),
            );
            false
        }
    }
}

async fn try_submit(temperature: f64) -> Result<SubmitAck, String> {
    #[derive(serde::Serialize)]
    struct SubmitRequest {
        temperature: f64,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/temperature", api_base))
        .json(&SubmitRequest { temperature })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_populated_response() {
        let body = r#"{
            "current": {"temperature": 22.5, "temp_f": 72.5, "timestamp": "2026-08-31T12:00:00.123456"},
            "stats": {"min": 18.0, "max": 25.0, "avg": 21.3},
            "history": [
                {"temperature": 18.0, "temp_f": 64.4, "timestamp": "2026-08-31T11:59:58"},
                {"temperature": 22.5, "temp_f": 72.5, "timestamp": "2026-08-31T12:00:00.123456"}
            ]
        }"#;

        let response: TemperatureResponse = serde_json::from_str(body).unwrap();
        let current = response.current.unwrap();
        assert_eq!(current.temperature, 22.5);
        assert_eq!(current.temp_f, Some(72.5));

        let stats = response.stats.unwrap();
        assert_eq!(stats.min, 18.0);
        assert_eq!(stats.avg, 21.3);

        assert_eq!(response.history.unwrap().len(), 2);
    }

    #[test]
    fn test_decode_no_data_yet() {
        let body = r#"{"current": null, "history": [], "stats": null}"#;
        let response: TemperatureResponse = serde_json::from_str(body).unwrap();
        assert!(response.current.is_none());
        assert!(response.stats.is_none());
        assert_eq!(response.history.unwrap().len(), 0);
    }

    #[test]
    fn test_decode_missing_fields() {
        let response: TemperatureResponse = serde_json::from_str("{}").unwrap();
        assert!(response.current.is_none());
        assert!(response.stats.is_none());
        assert!(response.history.is_none());
    }

    #[test]
    fn test_decode_reading_without_temp_f() {
        let body = r#"{"current": {"temperature": 10.0, "timestamp": "2026-08-31T12:00:00"}}"#;
        let response: TemperatureResponse = serde_json::from_str(body).unwrap();
        let current = response.current.unwrap();
        assert_eq!(current.temp_f, None);
        assert_eq!(current.fahrenheit(), 50.0);
    }

    #[test]
    fn test_submit_ack() {
        let ok: SubmitAck = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(ok.accepted());

        let err: SubmitAck =
            serde_json::from_str(r#"{"status": "error", "message": "No temperature data provided"}"#)
                .unwrap();
        assert!(!err.accepted());
    }
}
