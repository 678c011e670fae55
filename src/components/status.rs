//! Status Indicator
//!
//! Maps the connection state to display text and a colored dot.

use leptos::*;

use crate::state::global::GlobalState;

/// Connection status indicator component
#[component]
pub fn StatusIndicator() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let status = state.status;

    view! {
        <span class="flex items-center space-x-2">
            <span class=move || {
                format!("w-2 h-2 rounded-full {}", status.get().dot_class())
            } />
            <span class=move || format!("text-sm {}", status.get().text_class())>
                {move || status.get().label()}
            </span>
        </span>
    }
}
