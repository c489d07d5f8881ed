// File: crates/bench-core/src/axis.rs
// Summary: Axis model with labels, scale kind and tick placement.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log2,
}

/// Where major ticks go.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// Evenly spaced over the visible range.
    Auto,
    /// Exactly these values (those inside the visible range).
    Fixed(Vec<f64>),
    /// Every multiple of the step inside the visible range.
    Multiple(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub kind: ScaleKind,
    pub ticks: Ticks,
}

const AUTO_TICKS: usize = 5;
// Ticks closer than this fraction of a step to the range end still count as inside.
const EDGE_EPS: f64 = 1e-9;

impl Axis {
    pub fn new(label: impl Into<String>, kind: ScaleKind) -> Self {
        Self { label: label.into(), kind, ticks: Ticks::Auto }
    }

    pub fn linear(label: impl Into<String>) -> Self { Self::new(label, ScaleKind::Linear) }

    pub fn log2(label: impl Into<String>) -> Self { Self::new(label, ScaleKind::Log2) }

    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    /// Major tick values within `[min, max]`, ascending.
    pub fn tick_values(&self, min: f64, max: f64) -> Vec<f64> {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        match &self.ticks {
            Ticks::Fixed(values) => {
                let mut v: Vec<f64> = values.iter().copied().filter(|t| *t >= lo && *t <= hi).collect();
                v.sort_by(f64::total_cmp);
                v.dedup();
                v
            }
            Ticks::Multiple(step) => multiples(lo, hi, *step),
            Ticks::Auto => match self.kind {
                ScaleKind::Linear => crate::grid::linspace(lo, hi, AUTO_TICKS),
                ScaleKind::Log2 => powers_of_two(lo, hi),
            },
        }
    }

    /// Tick label text for `value`.
    pub fn format_tick(&self, value: f64) -> String {
        match self.kind {
            ScaleKind::Log2 => match exact_log2(value) {
                Some(k) => format!("2^{k}"),
                None => format_number(value),
            },
            ScaleKind::Linear => format_number(value),
        }
    }
}

/// Upper bound on the ticks one axis produces.
pub const MAX_TICKS: usize = 1000;

/// Every multiple of `step` in `[lo, hi]`; empty for a non-positive step.
///
/// When that would exceed [`MAX_TICKS`] the step is widened to the smallest
/// whole multiple of `step` that fits, so ticks stay on multiples of `step`.
pub fn multiples(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    let first = (lo / step - EDGE_EPS).ceil();
    let last = (hi / step + EDGE_EPS).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }
    let stride = ((last - first) / (MAX_TICKS - 1) as f64).ceil().max(1.0);
    let start = (first / stride).ceil() * stride;
    if start > last {
        return Vec::new();
    }
    let count = (((last - start) / stride).floor() as usize + 1).min(MAX_TICKS);
    (0..count).map(|i| (start + i as f64 * stride) * step).collect()
}

fn powers_of_two(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo > 0.0) || !hi.is_finite() {
        return Vec::new();
    }
    let first = (lo.log2() - EDGE_EPS).ceil() as i32;
    let last = (hi.log2() + EDGE_EPS).floor() as i32;
    (first..=last).map(|k| 2f64.powi(k)).collect()
}

fn exact_log2(value: f64) -> Option<i32> {
    if value <= 0.0 || !value.is_finite() {
        return None;
    }
    let k = value.log2().round() as i32;
    (2f64.powi(k) == value).then_some(k)
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
