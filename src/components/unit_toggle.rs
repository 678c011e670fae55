//! Unit Toggle
//!
//! Flips the active unit and triggers an immediate refresh so every
//! displayed value switches without waiting for the next scheduled tick.

use leptos::*;

use crate::poll;
use crate::state::global::GlobalState;

/// Unit toggle button component
#[component]
pub fn UnitToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let unit = state.unit;

    let on_click = move |_| {
        unit.update(|u| *u = u.toggled());
        poll::refresh(state.clone());
    };

    view! {
        <button
            on:click=on_click
            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm
                   font-medium transition-colors"
        >
            {move || unit.get().toggle_label()}
        </button>
    }
}
