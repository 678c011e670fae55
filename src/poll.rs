//! Polling
//!
//! The repeating poll task that drives the dashboard: one immediate fetch
//! on startup, then one per second. Each tick fetches a snapshot and fans
//! it out to the current-temperature card, statistics, chart, and status
//! indicator through the global signals.

use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use wasm_bindgen::JsValue;

use crate::api::{self, TemperatureResponse};
use crate::state::global::{ConnectionStatus, GlobalState};

/// Poll cadence for the temperature endpoint.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Start the repeating poll. Fires one refresh immediately, then one per
/// [`POLL_INTERVAL`]. The returned handle cancels the schedule.
pub fn start_polling(state: GlobalState) -> Result<IntervalHandle, JsValue> {
    refresh(state.clone());
    set_interval_with_handle(move || refresh(state.clone()), POLL_INTERVAL)
}

/// One fetch-and-render tick. Fire-and-forget: a failed fetch is logged,
/// surfaces only as the error status, and leaves previously rendered
/// values in place until the next tick retries.
pub fn refresh(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_temperature().await {
            Ok(snapshot) => apply_snapshot(&state, snapshot),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Error fetching temperature data: {}", e).into(),
                );
                apply_error(&state);
            }
        }
    });
}

/// Record a failed tick. Only the status indicator changes; every
/// previously rendered value stays visible until the next tick retries.
pub fn apply_error(state: &GlobalState) {
    state.status.set(ConnectionStatus::Error);
}

/// Apply one snapshot to the global signals.
///
/// A missing current reading means the server has no data yet: the current
/// card falls back to its placeholder while statistics and chart keep
/// their last rendered state. Stats and history are likewise only
/// replaced when the snapshot carries them.
pub fn apply_snapshot(state: &GlobalState, snapshot: TemperatureResponse) {
    match snapshot.current {
        Some(reading) => {
            let history = snapshot.history.unwrap_or_default();
            state.sample_count.set(history.len());
            if let Some(stats) = snapshot.stats {
                state.stats.set(Some(stats));
            }
            if !history.is_empty() {
                state.history.set(history);
            }
            state.current.set(Some(reading));
            state.status.set(ConnectionStatus::Connected);
        }
        None => {
            state.current.set(None);
            state.sample_count.set(0);
            state.status.set(ConnectionStatus::Waiting);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::{Reading, Stats};

    fn reading(temperature: f64, timestamp: &str) -> Reading {
        Reading {
            temperature,
            temp_f: None,
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_apply_connected_snapshot() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        apply_snapshot(
            &state,
            TemperatureResponse {
                current: Some(reading(22.5, "2026-08-31T12:00:00")),
                stats: Some(Stats {
                    min: 18.0,
                    max: 25.0,
                    avg: 21.3,
                }),
                history: Some(vec![
                    reading(18.0, "2026-08-31T11:59:59"),
                    reading(22.5, "2026-08-31T12:00:00"),
                ]),
            },
        );

        assert_eq!(
            state.current.get_untracked().unwrap().temperature,
            22.5
        );
        assert_eq!(state.stats.get_untracked().unwrap().max, 25.0);
        assert_eq!(state.history.get_untracked().len(), 2);
        assert_eq!(state.sample_count.get_untracked(), 2);
        assert_eq!(state.status.get_untracked(), ConnectionStatus::Connected);

        runtime.dispose();
    }

    #[test]
    fn test_apply_no_data_yet_keeps_stats_and_history() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        // Seed with a previous successful tick
        state.current.set(Some(reading(22.5, "2026-08-31T12:00:00")));
        state.stats.set(Some(Stats {
            min: 18.0,
            max: 25.0,
            avg: 21.3,
        }));
        state
            .history
            .set(vec![reading(22.5, "2026-08-31T12:00:00")]);
        state.sample_count.set(1);

        apply_snapshot(
            &state,
            TemperatureResponse {
                current: None,
                stats: None,
                history: Some(vec![]),
            },
        );

        assert!(state.current.get_untracked().is_none());
        assert_eq!(state.sample_count.get_untracked(), 0);
        assert_eq!(state.status.get_untracked(), ConnectionStatus::Waiting);
        // Previously rendered stats and chart data stay visible
        assert!(state.stats.get_untracked().is_some());
        assert_eq!(state.history.get_untracked().len(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_apply_error_leaves_rendered_values() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        // Seed with a previous successful tick
        state.current.set(Some(reading(22.5, "2026-08-31T12:00:00")));
        state.stats.set(Some(Stats {
            min: 18.0,
            max: 25.0,
            avg: 21.3,
        }));
        state
            .history
            .set(vec![reading(22.5, "2026-08-31T12:00:00")]);
        state.sample_count.set(1);

        apply_error(&state);

        assert_eq!(state.status.get_untracked(), ConnectionStatus::Error);
        // Stale-but-visible: everything else is untouched
        assert_eq!(
            state.current.get_untracked().unwrap().temperature,
            22.5
        );
        assert_eq!(state.stats.get_untracked().unwrap().avg, 21.3);
        assert_eq!(state.history.get_untracked().len(), 1);
        assert_eq!(state.sample_count.get_untracked(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_apply_snapshot_without_stats_retains_previous() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.stats.set(Some(Stats {
            min: 1.0,
            max: 2.0,
            avg: 1.5,
        }));

        apply_snapshot(
            &state,
            TemperatureResponse {
                current: Some(reading(3.0, "2026-08-31T12:00:01")),
                stats: None,
                history: None,
            },
        );

        assert_eq!(state.stats.get_untracked().unwrap().avg, 1.5);
        assert_eq!(state.status.get_untracked(), ConnectionStatus::Connected);
        assert_eq!(state.sample_count.get_untracked(), 0);

        runtime.dispose();
    }
}
