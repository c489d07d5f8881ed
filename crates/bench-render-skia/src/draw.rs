// File: crates/bench-render-skia/src/draw.rs
// Summary: Draws a bench-core chart onto a Skia canvas: layout, grid, traces, axes and legend.

use bench_core::axis::Axis;
use bench_core::style::{LineStyle, Marker, Rgb, TraceStyle};
use bench_core::{Chart, Scale};
use skia_safe as skia;

use crate::geometry::{place_legend, sample_polyline, RectF};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::*;

/// Everything the helpers need besides the chart.
pub(crate) struct Frame<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: &'a TextShaper,
    pub theme: &'a Theme,
    /// Pixels per point.
    pub k: f32,
    pub width: f32,
    pub height: f32,
    pub draw_labels: bool,
}

impl Frame<'_> {
    #[inline]
    fn px(&self, pt: f32) -> f32 { pt * self.k }

    fn measure(&self, text: &str, size_pt: f32) -> (f32, f32) {
        if self.draw_labels && !text.is_empty() {
            self.text.measure(text, self.px(size_pt))
        } else {
            (0.0, 0.0)
        }
    }
}

struct TickLabels {
    values: Vec<f64>,
    labels: Vec<String>,
    max_w: f32,
    max_h: f32,
}

fn tick_labels(frame: &Frame<'_>, axis: &Axis, values: Vec<f64>) -> TickLabels {
    let labels: Vec<String> = values.iter().map(|v| axis.format_tick(*v)).collect();
    let (mut max_w, mut max_h) = (0.0f32, 0.0f32);
    for l in &labels {
        let (w, h) = frame.measure(l, TICK_FONT_PT);
        max_w = max_w.max(w);
        max_h = max_h.max(h);
    }
    TickLabels { values, labels, max_w, max_h }
}

pub(crate) fn draw_chart(frame: &Frame<'_>, chart: &Chart) {
    let canvas = frame.canvas;
    let view = chart.view();
    let xt = tick_labels(frame, &chart.x_axis, chart.x_axis.tick_values(view.x_min, view.x_max));
    let yt = tick_labels(frame, &chart.y_axis, chart.y_axis.tick_values(view.y_min, view.y_max));

    // Tight layout: reserve exactly what the text around the plot needs.
    let (_, x_label_h) = frame.measure(&chart.x_axis.label, LABEL_FONT_PT);
    let (_, y_label_h) = frame.measure(&chart.y_axis.label, LABEL_FONT_PT);
    let (_, title_h) = frame.measure(&chart.title, TITLE_FONT_PT);
    let tick_room = frame.px(TICK_LEN_PT + TICK_PAD_PT);
    let outer = frame.px(OUTER_PAD_PT);
    let last_x_w = xt.labels.last().map_or(0.0, |l| frame.measure(l, TICK_FONT_PT).0);
    let insets = Insets::new(
        outer + y_label_h + frame.px(LABEL_PAD_PT) + yt.max_w + tick_room,
        outer + last_x_w * 0.5,
        outer + title_h + frame.px(TITLE_PAD_PT),
        outer + x_label_h + frame.px(LABEL_PAD_PT) + xt.max_h + tick_room,
    );
    let plot = RectF::from_ltwh(
        insets.left,
        insets.top,
        (frame.width - insets.hsum()).max(1.0),
        (frame.height - insets.vsum()).max(1.0),
    );

    let sx = Scale::new(chart.x_axis.kind, plot.left, plot.right, view.x_min, view.x_max);
    let sy = Scale::new(chart.y_axis.kind, plot.bottom, plot.top, view.y_min, view.y_max);

    canvas.clear(frame.theme.background);
    let mut bg = skia::Paint::default();
    bg.set_color(frame.theme.plot_background);
    canvas.draw_rect(skia::Rect::from(plot), &bg);

    if chart.grid.visible {
        draw_grid(frame, chart, plot, &sx, &sy, &xt.values, &yt.values);
    }

    // Traces are clipped to the plot area.
    let trace_px: Vec<Vec<(f32, f32)>> = chart
        .traces
        .iter()
        .map(|t| t.points.iter().map(|&(x, y)| (sx.to_px(x), sy.to_px(y))).collect())
        .collect();
    canvas.save();
    canvas.clip_rect(skia::Rect::from(plot), skia::ClipOp::Intersect, true);
    for (trace, pts) in chart.traces.iter().zip(&trace_px) {
        draw_trace(frame, &trace.style, pts);
    }
    canvas.restore();

    draw_frame(frame, plot);
    draw_ticks(frame, plot, &sx, &sy, &xt, &yt);

    let ink = frame.theme.axis_label;
    if frame.draw_labels {
        let x_label_top = plot.bottom + tick_room + xt.max_h + frame.px(LABEL_PAD_PT);
        frame.text.draw(canvas, &chart.x_axis.label, (plot.left + plot.right) * 0.5, x_label_top, frame.px(LABEL_FONT_PT), ink, Anchor::Center);
        frame.text.draw_vertical(canvas, &chart.y_axis.label, outer, (plot.top + plot.bottom) * 0.5, frame.px(LABEL_FONT_PT), ink);
        let title_top = plot.top - frame.px(TITLE_PAD_PT) - title_h;
        frame.text.draw(canvas, &chart.title, (plot.left + plot.right) * 0.5, title_top, frame.px(TITLE_FONT_PT), frame.theme.title, Anchor::Center);
    }

    if let Some(legend) = &chart.legend {
        let occupied: Vec<(f32, f32)> = trace_px.iter().flat_map(|p| sample_polyline(p, 16)).collect();
        draw_legend(frame, chart, &legend.title, legend.location, plot, &occupied);
    }
}

fn dash_effect(line: LineStyle, width_px: f32) -> Option<skia::PathEffect> {
    match line {
        LineStyle::Dashed { offset, on, off } if !line.is_solid() => {
            skia::PathEffect::dash(&[on * width_px, off * width_px], offset * width_px)
        }
        _ => None,
    }
}

fn color(rgb: Rgb, alpha: u8) -> skia::Color {
    skia::Color::from_argb(alpha, rgb.0, rgb.1, rgb.2)
}

fn stroke_paint(c: skia::Color, width_px: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width_px);
    p.set_color(c);
    p
}

fn draw_grid(frame: &Frame<'_>, chart: &Chart, plot: RectF, sx: &Scale, sy: &Scale, xs: &[f64], ys: &[f64]) {
    let w = frame.px(chart.grid.line_width);
    let mut paint = stroke_paint(frame.theme.grid, w);
    paint.set_path_effect(dash_effect(chart.grid.line, w));
    for &x in xs {
        let px = sx.to_px(x);
        frame.canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    for &y in ys {
        let py = sy.to_px(y);
        frame.canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_trace(frame: &Frame<'_>, style: &TraceStyle, pts: &[(f32, f32)]) {
    let c = color(style.color, style.alpha_u8());
    let w = frame.px(style.line_width);
    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for &p in &pts[1..] {
            path.line_to(p);
        }
        let mut stroke = stroke_paint(c, w);
        stroke.set_stroke_join(skia::paint::Join::Round);
        if let Some(effect) = dash_effect(style.line, w) {
            stroke.set_stroke_cap(skia::paint::Cap::Butt);
            stroke.set_path_effect(effect);
        } else {
            stroke.set_stroke_cap(skia::paint::Cap::Square);
        }
        frame.canvas.draw_path(&path, &stroke);
    }
    for &p in pts {
        draw_marker(frame, style.marker, p, frame.px(style.marker_size), c);
    }
}

fn draw_marker(frame: &Frame<'_>, marker: Marker, (x, y): (f32, f32), size: f32, c: skia::Color) {
    let r = size * 0.5;
    let edge = stroke_paint(c, frame.px(1.0));
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(c);
    let canvas = frame.canvas;
    match marker {
        Marker::None => {}
        Marker::Cross => {
            canvas.draw_line((x - r, y - r), (x + r, y + r), &edge);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &edge);
        }
        Marker::TriangleDown => {
            let mut path = skia::Path::new();
            path.move_to((x, y + r));
            path.line_to((x - r, y - r));
            path.line_to((x + r, y - r));
            path.close();
            canvas.draw_path(&path, &fill);
            canvas.draw_path(&path, &edge);
        }
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
            canvas.draw_circle((x, y), r, &edge);
        }
        Marker::Square => {
            let rect = skia::Rect::from_ltrb(x - r, y - r, x + r, y + r);
            canvas.draw_rect(rect, &fill);
            canvas.draw_rect(rect, &edge);
        }
    }
}

fn draw_frame(frame: &Frame<'_>, plot: RectF) {
    let paint = stroke_paint(frame.theme.axis_line, frame.px(FRAME_WIDTH_PT));
    frame.canvas.draw_rect(skia::Rect::from(plot), &paint);
}

fn draw_ticks(frame: &Frame<'_>, plot: RectF, sx: &Scale, sy: &Scale, xt: &TickLabels, yt: &TickLabels) {
    let canvas = frame.canvas;
    let len = frame.px(TICK_LEN_PT);
    let pad = frame.px(TICK_PAD_PT);
    let size = frame.px(TICK_FONT_PT);
    let paint = stroke_paint(frame.theme.tick, frame.px(TICK_WIDTH_PT));

    for (v, label) in xt.values.iter().zip(&xt.labels) {
        let px = sx.to_px(*v);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + len), &paint);
        if frame.draw_labels {
            frame.text.draw(canvas, label, px, plot.bottom + len + pad, size, frame.theme.tick, Anchor::Center);
        }
    }
    for (v, label) in yt.values.iter().zip(&yt.labels) {
        let py = sy.to_px(*v);
        canvas.draw_line((plot.left - len, py), (plot.left, py), &paint);
        if frame.draw_labels {
            let (_, h) = frame.measure(label, TICK_FONT_PT);
            frame.text.draw(canvas, label, plot.left - len - pad, py - h * 0.5, size, frame.theme.tick, Anchor::Right);
        }
    }
}

fn draw_legend(
    frame: &Frame<'_>,
    chart: &Chart,
    title: &str,
    location: bench_core::LegendLocation,
    plot: RectF,
    occupied: &[(f32, f32)],
) {
    if chart.traces.is_empty() {
        return;
    }
    let canvas = frame.canvas;
    let fs = frame.px(LEGEND_FONT_PT);
    let border_pad = 0.4 * fs;
    let handle_len = 2.0 * fs;
    let handle_gap = 0.8 * fs;
    let spacing = 0.5 * fs;

    let (title_w, title_h) = frame.measure(title, LEGEND_TITLE_PT);
    let sizes: Vec<(f32, f32)> = chart.traces.iter().map(|t| frame.measure(&t.label, LEGEND_FONT_PT)).collect();
    let label_w = sizes.iter().map(|s| s.0).fold(0.0f32, f32::max);
    let row_h = sizes.iter().map(|s| s.1).fold(fs, f32::max);
    let n = chart.traces.len() as f32;

    let w = title_w.max(handle_len + handle_gap + label_w) + 2.0 * border_pad;
    let h = 2.0 * border_pad + title_h + spacing + n * row_h + (n - 1.0) * spacing;
    let rect = place_legend(plot, location, w, h, spacing, occupied);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(frame.theme.legend_fill);
    let radius = 0.2 * fs;
    canvas.draw_round_rect(skia::Rect::from(rect), radius, radius, &fill);
    let border = stroke_paint(frame.theme.legend_border, frame.px(FRAME_WIDTH_PT));
    canvas.draw_round_rect(skia::Rect::from(rect), radius, radius, &border);

    let ink = frame.theme.axis_label;
    if frame.draw_labels {
        frame.text.draw(canvas, title, (rect.left + rect.right) * 0.5, rect.top + border_pad, frame.px(LEGEND_TITLE_PT), ink, Anchor::Center);
    }

    let mut row_top = rect.top + border_pad + title_h + spacing;
    for (trace, (_, lh)) in chart.traces.iter().zip(&sizes) {
        let cy = row_top + row_h * 0.5;
        let x0 = rect.left + border_pad;
        let handle = [(x0, cy), (x0 + handle_len, cy)];
        draw_trace(frame, &TraceStyle { marker: Marker::None, ..trace.style }, &handle);
        let c = color(trace.style.color, trace.style.alpha_u8());
        draw_marker(frame, trace.style.marker, (x0 + handle_len * 0.5, cy), frame.px(trace.style.marker_size), c);
        if frame.draw_labels {
            frame.text.draw(canvas, &trace.label, x0 + handle_len + handle_gap, cy - lh * 0.5, fs, ink, Anchor::Left);
        }
        row_top += row_h + spacing;
    }
}
