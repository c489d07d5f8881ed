// File: crates/bench-core/src/series.rs
// Summary: Series model: static per-column styles and the materialized traces drawn from them.

use crate::style::TraceStyle;

/// Inclusion rule evaluated against the bench-type selector.
pub type Predicate = fn(u32) -> bool;

/// How one table column is drawn, plus an optional rule deciding if it is drawn at all.
#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    /// Column name in the table.
    pub key: &'static str,
    /// Legend label.
    pub label: &'static str,
    pub style: TraceStyle,
    pub include: Option<Predicate>,
}

impl SeriesStyle {
    pub const fn new(key: &'static str, label: &'static str, style: TraceStyle) -> Self {
        Self { key, label, style, include: None }
    }

    pub const fn when(self, include: Predicate) -> Self {
        Self { include: Some(include), ..self }
    }

    pub fn is_included(&self, selector: u32) -> bool {
        self.include.map_or(true, |p| p(selector))
    }
}

/// A line-plus-marker trace ready to draw: (x, y) points in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: TraceStyle,
}

impl Trace {
    /// Pair `xs` with `ys` point by point.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64], style: TraceStyle) -> Self {
        Self {
            label: label.into(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            style,
        }
    }
}
