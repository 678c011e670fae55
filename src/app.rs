//! App Root Component
//!
//! Single-page layout with global providers and the repeating poll.

use leptos::*;

use crate::components::{
    Chart, CurrentTemperature, ReadingEntry, StatsPanel, StatusIndicator, UnitToggle,
};
use crate::poll;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Start the 1-second poll; the handle cancels it when the app unmounts
    match poll::start_polling(state.clone()) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&format!("Failed to start polling: {:?}", e).into()),
    }

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Header with the unit toggle
            <header class="border-b border-gray-700 py-4 px-4">
                <div class="container mx-auto flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold">"Temperature Monitor"</h1>
                        <p class="text-gray-400 text-sm mt-1">"Live readings at a glance"</p>
                    </div>
                    <UnitToggle />
                </div>
            </header>

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-8">
                // Current reading and statistics
                <section class="grid md:grid-cols-2 gap-8">
                    <CurrentTemperature />
                    <StatsPanel />
                </section>

                // History chart
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Temperature History"</h2>
                    <Chart />
                </section>

                // Manual reading entry
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Log Reading"</h2>
                    <ReadingEntry />
                </section>
            </main>

            // Footer with connection status
            <Footer />
        </div>
    }
}

/// Footer component showing connection status and the poll cadence
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let sample_count = state.sample_count;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <StatusIndicator />

                <div class="text-gray-400">
                    {move || format!("{} samples", sample_count.get())}
                </div>

                <div class="text-gray-400">
                    {format!("Refreshing every {}s", poll::POLL_INTERVAL.as_secs())}
                </div>
            </div>
        </footer>
    }
}
