//! Chart Component
//!
//! Draws a `ChartSpec` onto an HTML5 canvas: line charts as a filled
//! polyline, bar charts as one bar per label.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use biopharm::dashboard::{ChartKind, ChartSlot, ChartSpec, Dataset};

use crate::state::SignalView;

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const GRID_LINES: u32 = 5;

/// Canvas bound to one chart slot; redraws whenever the slot's spec changes
#[component]
pub fn ChartCanvas(slot: ChartSlot) -> impl IntoView {
    let view = use_context::<SignalView>().expect("SignalView not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let spec = view.charts.with(|charts| charts.get(&slot).cloned());

        if let (Some(canvas), Some(spec)) = (canvas_ref.get(), spec) {
            draw_chart(&canvas, &spec);
        }
    });

    view! {
        <canvas
            id=slot.element_id()
            node_ref=canvas_ref
            width="600"
            height="300"
            class="w-full h-64 rounded-lg bg-white"
        />
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Round the axis up to a multiple of the grid count so labels stay whole
    let max = spec.max_value().max(1) as f64;
    let step = (max / GRID_LINES as f64).ceil();
    let y_max = step * GRID_LINES as f64;

    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");

    for i in 0..=GRID_LINES {
        let y = MARGIN_TOP + (i as f64 / GRID_LINES as f64) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - i as f64 * step;
        let _ = ctx.fill_text(&format!("{}", value), 5.0, y + 4.0);
    }

    let labels = &spec.data.labels;
    if labels.is_empty() {
        return;
    }
    let slot_width = chart_width / labels.len() as f64;
    let scale_y = |value: u64| MARGIN_TOP + (1.0 - value as f64 / y_max) * chart_height;

    for dataset in &spec.data.datasets {
        match spec.kind {
            ChartKind::Line => draw_line(&ctx, dataset, slot_width, scale_y),
            ChartKind::Bar => draw_bars(&ctx, dataset, slot_width, scale_y),
        }
    }

    ctx.set_fill_style(&"#6b7280".into());
    for (i, label) in labels.iter().enumerate() {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * slot_width;
        let _ = ctx.fill_text(label, x - 4.0 * label.len() as f64, height - 15.0);
    }
}

fn draw_line(
    ctx: &CanvasRenderingContext2d,
    dataset: &Dataset,
    slot_width: f64,
    scale_y: impl Fn(u64) -> f64,
) {
    let points: Vec<(f64, f64)> = dataset
        .data
        .iter()
        .enumerate()
        .map(|(i, &value)| (MARGIN_LEFT + (i as f64 + 0.5) * slot_width, scale_y(value)))
        .collect();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };

    if dataset.fill {
        ctx.set_fill_style(&dataset.background_color.color_at(0).into());
        ctx.begin_path();
        ctx.move_to(first.0, scale_y(0));
        for &(x, y) in &points {
            ctx.line_to(x, y);
        }
        ctx.line_to(last.0, scale_y(0));
        ctx.close_path();
        ctx.fill();
    }

    let stroke = dataset
        .border_color
        .as_deref()
        .unwrap_or_else(|| dataset.background_color.color_at(0));
    ctx.set_stroke_style(&stroke.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&stroke.into());
    for &(x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    dataset: &Dataset,
    slot_width: f64,
    scale_y: impl Fn(u64) -> f64,
) {
    let bar_width = slot_width * 0.6;
    let base = scale_y(0);

    for (i, &value) in dataset.data.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let top = scale_y(value);
        ctx.set_fill_style(&dataset.background_color.color_at(i).into());
        ctx.fill_rect(x, top, bar_width, base - top);
    }
}
