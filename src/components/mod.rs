//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod current_temp;
pub mod reading_entry;
pub mod stats;
pub mod status;
pub mod unit_toggle;

pub use chart::Chart;
pub use current_temp::CurrentTemperature;
pub use reading_entry::ReadingEntry;
pub use stats::StatsPanel;
pub use status::StatusIndicator;
pub use unit_toggle::UnitToggle;
