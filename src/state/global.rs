//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the domain types
//! decoded from the temperature endpoint.

use leptos::*;

/// Convert a Celsius value to Fahrenheit.
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert a Fahrenheit value to Celsius.
pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// The active display unit. Exactly one is active at any time; every
/// rendered numeric field follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }

    /// Display suffix for values in this unit.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Label for the toggle button while this unit is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Unit::Celsius => "Switch to °F",
            Unit::Fahrenheit => "Switch to °C",
        }
    }

    /// Map a Celsius-origin value into this unit.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => to_fahrenheit(celsius),
        }
    }
}

/// One timestamped temperature sample from the server.
///
/// Values are Celsius-origin; `temp_f` is the server-supplied Fahrenheit
/// pair when present.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reading {
    pub temperature: f64,
    #[serde(default)]
    pub temp_f: Option<f64>,
    pub timestamp: String,
}

impl Reading {
    /// Fahrenheit value, derived locally when the server did not supply it.
    pub fn fahrenheit(&self) -> f64 {
        self.temp_f.unwrap_or_else(|| to_fahrenheit(self.temperature))
    }

    /// Value in the given unit.
    pub fn in_unit(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Celsius => self.temperature,
            Unit::Fahrenheit => self.fahrenheit(),
        }
    }
}

/// Summary statistics over the server-side reading window, in Celsius.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Connection state shown by the status indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Waiting,
    Error,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Waiting => "Waiting for data...",
            ConnectionStatus::Error => "Connection error",
        }
    }

    /// Dot color for the status indicator.
    pub fn dot_class(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "bg-green-400",
            ConnectionStatus::Waiting => "bg-gray-400",
            ConnectionStatus::Error => "bg-red-400",
        }
    }

    /// Text color for the status indicator.
    pub fn text_class(self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "text-green-400",
            ConnectionStatus::Waiting => "text-gray-400",
            ConnectionStatus::Error => "text-red-400",
        }
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active display unit, mutated only by the unit toggle
    pub unit: RwSignal<Unit>,
    /// Latest reading, `None` while the server has no data
    pub current: RwSignal<Option<Reading>>,
    /// Min/max/avg over the server-side window
    pub stats: RwSignal<Option<Stats>>,
    /// Reading history, oldest to newest; drives the chart
    pub history: RwSignal<Vec<Reading>>,
    /// Connection status shown in the footer
    pub status: RwSignal<ConnectionStatus>,
    /// History length reported by the last successful poll
    pub sample_count: RwSignal<usize>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            unit: create_rw_signal(Unit::Celsius),
            current: create_rw_signal(None),
            stats: create_rw_signal(None),
            history: create_rw_signal(Vec::new()),
            status: create_rw_signal(ConnectionStatus::Waiting),
            sample_count: create_rw_signal(0),
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fahrenheit() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(22.5), 72.5);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_to_fahrenheit_matches_scale_factor() {
        // c * 9/5 and c * 1.8 can differ in the last ulp; the displayed
        // one-decimal value must agree regardless
        for c in [-12.3, 0.0, 5.5, 21.0, 36.6] {
            assert!((to_fahrenheit(c) - (c * 1.8 + 32.0)).abs() < 1e-9);
            assert_eq!(
                format!("{:.1}", to_fahrenheit(c)),
                format!("{:.1}", c * 1.8 + 32.0)
            );
        }
    }

    #[test]
    fn test_to_celsius_inverts() {
        for c in [-10.0, 0.0, 18.0, 25.0, 30.0] {
            assert!((to_celsius(to_fahrenheit(c)) - c).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unit_toggle_round_trip() {
        assert_eq!(Unit::Celsius.toggled(), Unit::Fahrenheit);
        assert_eq!(Unit::Celsius.toggled().toggled(), Unit::Celsius);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(Unit::Celsius.suffix(), "°C");
        assert_eq!(Unit::Fahrenheit.suffix(), "°F");
        assert_eq!(Unit::Celsius.toggle_label(), "Switch to °F");
        assert_eq!(Unit::Fahrenheit.toggle_label(), "Switch to °C");
    }

    #[test]
    fn test_reading_fahrenheit_prefers_server_value() {
        let reading = Reading {
            temperature: 22.5,
            temp_f: Some(72.5),
            timestamp: "2026-08-31T12:00:00".to_string(),
        };
        assert_eq!(reading.fahrenheit(), 72.5);
        assert_eq!(reading.in_unit(Unit::Celsius), 22.5);
        assert_eq!(reading.in_unit(Unit::Fahrenheit), 72.5);
    }

    #[test]
    fn test_reading_fahrenheit_derived_when_missing() {
        let reading = Reading {
            temperature: 10.0,
            temp_f: None,
            timestamp: "2026-08-31T12:00:00".to_string(),
        };
        assert_eq!(reading.fahrenheit(), 50.0);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
        assert_eq!(ConnectionStatus::Waiting.label(), "Waiting for data...");
        assert_eq!(ConnectionStatus::Error.label(), "Connection error");
    }
}
