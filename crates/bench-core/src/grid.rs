// File: crates/bench-core/src/grid.rs
// Summary: Grid style and simple tick layout helpers.

use crate::style::LineStyle;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Background grid drawn at major ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    pub visible: bool,
    pub line: LineStyle,
    /// Stroke width in points.
    pub line_width: f32,
}

impl GridStyle {
    /// Major grid with a `--` dash.
    pub const fn dashed() -> Self {
        Self { visible: true, line: LineStyle::dashed(3.7, 1.6), line_width: 0.8 }
    }
}

impl Default for GridStyle {
    fn default() -> Self { Self::dashed() }
}
