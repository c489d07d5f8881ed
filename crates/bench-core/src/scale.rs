// File: crates/bench-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and base-2 logarithmic axes.

use crate::axis::ScaleKind;

/// Logical data value.
pub type Value = f64;

// Smallest value mapped on a log axis; non-positive data is clamped here.
const LOG_FLOOR: f64 = 1e-12;

/// Maps `[vmin, vmax]` onto `[start_px, end_px]`. `end_px` may be smaller than
/// `start_px` (vertical axes grow upwards).
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    pub kind: ScaleKind,
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    // cached transformed endpoints
    t_min: f64,
    t_max: f64,
}

impl Scale {
    pub fn new(kind: ScaleKind, start_px: f32, end_px: f32, vmin: Value, vmax: Value) -> Self {
        let (mut vmin, mut vmax) = (vmin, vmax);
        if kind == ScaleKind::Log2 {
            vmin = vmin.max(LOG_FLOOR);
            if vmax <= vmin { vmax = vmin * 2.0; }
        } else if (vmax - vmin).abs() < 1e-12 {
            vmax = vmin + 1.0;
        }
        let t_min = forward(kind, vmin);
        let t_max = forward(kind, vmax);
        Self { kind, start_px, end_px, vmin, vmax, t_min, t_max }
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = (self.t_max - self.t_min).max(1e-12);
        let frac = (forward(self.kind, v) - self.t_min) / span;
        self.start_px + frac as f32 * (self.end_px - self.start_px)
    }
}

/// Value in the axis' transformed space.
#[inline]
pub fn forward(kind: ScaleKind, v: Value) -> f64 {
    match kind {
        ScaleKind::Linear => v,
        ScaleKind::Log2 => v.max(LOG_FLOOR).log2(),
    }
}

#[inline]
pub fn inverse(kind: ScaleKind, t: f64) -> Value {
    match kind {
        ScaleKind::Linear => t,
        ScaleKind::Log2 => t.exp2(),
    }
}
