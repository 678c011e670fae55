//! Chart Component
//!
//! Temperature history line chart using HTML5 Canvas. The dataset is
//! rebuilt wholesale from the history signal on every redraw; an empty
//! history leaves the previous frame in place.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::chart_series;
use crate::state::global::GlobalState;

/// Series color for the temperature line
const SERIES_COLOR: &str = "#2563eb";

/// Temperature history chart component
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the history or the active unit changes
    let draw_state = state.clone();
    create_effect(move |_| {
        let history = draw_state.history.get();
        let unit = draw_state.unit.get();

        if history.is_empty() {
            // Retain the previous frame
            return;
        }

        let (labels, values) = chart_series(&history, unit);
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &labels, &values, unit.suffix());
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            <ChartLegend />
        </div>
    }
}

/// Legend line carrying the active unit
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex justify-center items-center space-x-2 mt-4">
            <div
                class="w-3 h-3 rounded-full"
                style=format!("background-color: {}", SERIES_COLOR)
            />
            <span class="text-sm text-gray-300">
                {move || format!("Temperature ({})", state.unit.get().suffix())}
            </span>
        </div>
    }
}

/// Draw the chart on canvas. Redraw is immediate, with no transition
/// animation, so sub-second refreshes stay visually stable.
fn draw_chart(canvas: &HtmlCanvasElement, labels: &[String], values: &[f64], unit_suffix: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 24.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Y range from the data, with padding
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for value in values {
        y_min = y_min.min(*value);
        y_max = y_max.max(*value);
    }

    let y_range = y_max - y_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    y_min -= y_padding;
    y_max += y_padding;

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Axis title with the active unit
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(&format!("Temperature ({})", unit_suffix), margin_left, 14.0);

    // X position for the i-th reading, in history order
    let x_at = |i: usize| {
        if values.len() > 1 {
            margin_left + (i as f64 / (values.len() - 1) as f64) * chart_width
        } else {
            margin_left + chart_width / 2.0
        }
    };
    let y_at = |value: f64| margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;

    // Temperature line
    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, value) in values.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(*value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&SERIES_COLOR.into());
    for (i, value) in values.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(x_at(i), y_at(*value), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Time-of-day labels, subsampled to at most six
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let step = (labels.len() / 6).max(1);
    for (i, label) in labels.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let _ = ctx.fill_text(label, x_at(i) - 24.0, height - 10.0);
    }
}
