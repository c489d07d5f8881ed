// File: crates/bench-core/src/view.rs
// Visible data limits derived from a chart's traces.

use crate::axis::ScaleKind;
use crate::scale::{forward, inverse};
use crate::Chart;

/// Fraction of the data span added on each side of an axis.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn from_chart(chart: &Chart) -> Self {
        let points = || chart.traces.iter().flat_map(|t| t.points.iter().copied());
        let (x_min, x_max) = padded_limits(chart.x_axis.kind, points().map(|(x, _)| x));
        let (y_min, y_max) = padded_limits(chart.y_axis.kind, points().map(|(_, y)| y));
        Self { x_min, x_max, y_min, y_max }
    }
}

/// Data min/max widened by `MARGIN`, computed in the axis' transformed space.
/// Non-finite values (and non-positive ones on log axes) are ignored.
fn padded_limits(kind: ScaleKind, values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() || (kind == ScaleKind::Log2 && v <= 0.0) {
            continue;
        }
        let t = forward(kind, v);
        lo = lo.min(t);
        hi = hi.max(t);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return match kind {
            ScaleKind::Linear => (0.0, 1.0),
            ScaleKind::Log2 => (1.0, 2.0),
        };
    }
    let span = hi - lo;
    let pad = if span.abs() < 1e-12 { 0.5 } else { span * MARGIN };
    (inverse(kind, lo - pad), inverse(kind, hi + pad))
}
