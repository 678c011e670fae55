//! Statistics Panel
//!
//! Min/max/avg cards in the active unit. The stats signal is only
//! replaced when a poll carries statistics, so the cards keep their last
//! values across empty snapshots.

use leptos::*;

use crate::format::stats_view;
use crate::state::global::GlobalState;

/// Statistics panel component
#[component]
pub fn StatsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let stats = create_memo(move |_| {
        state
            .stats
            .get()
            .map(|s| stats_view(&s, state.unit.get()))
    });

    view! {
        <div class="grid grid-cols-3 gap-4">
            <StatCard label="Min" value=Signal::derive(move || stats.get().map(|s| s.min)) />
            <StatCard label="Max" value=Signal::derive(move || stats.get().map(|s| s.max)) />
            <StatCard label="Avg" value=Signal::derive(move || stats.get().map(|s| s.avg)) />
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-2xl font-semibold mt-1">
                {move || value.get().unwrap_or_else(|| "--".to_string())}
            </div>
        </div>
    }
}
