//! Current Temperature Card
//!
//! Shows the latest reading in the active unit, the converted pair, and a
//! relative "time since" line. Falls back to placeholders while the
//! server has no data.

use chrono::Utc;
use leptos::*;

use crate::format::{current_view, placeholder_view};
use crate::state::global::GlobalState;

/// Current temperature card component
#[component]
pub fn CurrentTemperature() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let suffix_state = state.clone();
    let card = create_memo(move |_| {
        let unit = state.unit.get();
        match state.current.get() {
            Some(reading) => current_view(&reading, unit, Utc::now()),
            None => placeholder_view(unit),
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-6 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">"Current Temperature"</span>
                // Active-unit suffix indicator
                <span class="text-gray-500 text-xs">
                    {move || suffix_state.unit.get().suffix()}
                </span>
            </div>

            <div class=move || format!("text-5xl font-bold mt-2 {}", card.get().class)>
                {move || card.get().primary}
            </div>

            <div class="text-gray-400 mt-1">{move || card.get().secondary}</div>

            <div class="text-gray-500 text-sm mt-2">{move || card.get().updated}</div>
        </div>
    }
}
