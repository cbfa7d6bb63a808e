//! Chart Component
//!
//! Line chart of global cumulative cases drawn on an HTML5 canvas. Scaling
//! and tick placement come from `outbreak::dashboard::ChartGeometry`.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use outbreak::dashboard::{format_count_compact, ChartGeometry, LineChartConfig};

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#e5e7eb"; // gray-200
const AXIS_TEXT: &str = "#6b7280"; // gray-500

/// Cumulative case line chart
#[component]
pub fn Chart(config: LineChartConfig) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let title = config.title.clone();
    let legend = config.dataset.label.clone();
    let swatch = format!("background-color: {}", config.dataset.border_color);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &config);
        }
    });

    view! {
        <div class="relative">
            <h2 class="text-xl font-semibold text-center mb-2">{title}</h2>
            <div class="flex justify-center items-center space-x-2 mb-4">
                <div class="w-3 h-3 rounded-full" style=swatch />
                <span class="text-sm text-gray-600">{legend}</span>
            </div>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96"
            />
        </div>
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, config: &LineChartConfig) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let data = &config.dataset.data;
    let geometry = ChartGeometry::new(canvas.width() as f64, canvas.height() as f64, data);
    let (width, height) = (geometry.width, geometry.height);
    let margins = geometry.margins;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal gridlines with compact count labels
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for (y, value) in geometry.y_ticks(5) {
        ctx.begin_path();
        ctx.move_to(margins.left, y);
        ctx.line_to(width - margins.right, y);
        ctx.stroke();

        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&format_count_compact(value), 5.0, y + 4.0);
    }

    // X labels are day indices
    for (x, index) in geometry.x_ticks(data.len(), 6) {
        if let Some(label) = config.labels.get(index) {
            let _ = ctx.fill_text(label, x - 8.0, height - 15.0);
        }
    }

    if data.is_empty() {
        return;
    }

    ctx.set_stroke_style(&config.dataset.border_color.as_str().into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &value) in data.iter().enumerate() {
        let (x, y) = geometry.project(i, value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers only while they stay readable
    if data.len() <= 60 {
        ctx.set_fill_style(&config.dataset.background_color.as_str().into());
        for (i, &value) in data.iter().enumerate() {
            let (x, y) = geometry.project(i, value);
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}
