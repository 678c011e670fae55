//! Reading Entry
//!
//! Quick-entry widget for submitting a Celsius reading by hand, e.g. from
//! a reference thermometer. The next poll tick picks the new reading up.

use leptos::*;

use crate::api;

/// Manual reading entry component
#[component]
pub fn ReadingEntry() -> impl IntoView {
    let (value, set_value) = create_signal(21.0_f64);
    let (submitting, set_submitting) = create_signal(false);
    let (feedback, set_feedback) = create_signal(None::<(bool, String)>);

    let on_submit = move |_| {
        let v = value.get();
        set_submitting.set(true);

        spawn_local(async move {
            if api::submit_reading(v).await {
                set_feedback.set(Some((true, format!("Logged {:.1}°C", v))));
            } else {
                set_feedback.set(Some((false, "Submission failed".to_string())));
            }
            set_submitting.set(false);

            // Auto-clear the feedback line
            gloo_timers::callback::Timeout::new(3000, move || {
                set_feedback.set(None);
            })
            .forget();
        });
    };

    view! {
        <div class="space-y-3">
            <div class="flex items-center space-x-4">
                <span class="text-gray-400 text-sm">"Temperature (°C)"</span>
                <input
                    type="number"
                    step="0.1"
                    prop:value=move || value.get().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            set_value.set(v);
                        }
                    }
                    class="w-28 bg-gray-700 rounded-lg px-3 py-2 text-white
                           border border-gray-600 focus:border-blue-500 focus:outline-none"
                />
                <button
                    on:click=on_submit
                    disabled=move || submitting.get()
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Saving..." } else { "Log" }}
                </button>
            </div>

            {move || {
                feedback.get().map(|(ok, message)| {
                    let color = if ok { "text-green-400" } else { "text-red-400" };
                    view! {
                        <p class=format!("text-sm {}", color)>{message}</p>
                    }
                })
            }}
        </div>
    }
}
