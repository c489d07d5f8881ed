// File: crates/bench-core/src/chart.rs
// Summary: Chart description handed to a renderer: title, axes, grid, traces and legend.

use crate::axis::Axis;
use crate::grid::GridStyle;
use crate::series::Trace;
use crate::view::ViewState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLocation {
    /// Corner of the plot area covering the fewest data points.
    #[default]
    Best,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Titled legend box; entries follow trace order.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub title: String,
    pub location: LegendLocation,
}

impl Legend {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), location: LegendLocation::Best }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: GridStyle,
    pub traces: Vec<Trace>,
    pub legend: Option<Legend>,
}

impl Chart {
    pub fn new(title: impl Into<String>, x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            title: title.into(),
            x_axis,
            y_axis,
            grid: GridStyle::default(),
            traces: Vec::new(),
            legend: None,
        }
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Legend entries in drawing order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.label.as_str()).collect()
    }

    /// Visible data limits with margins.
    pub fn view(&self) -> ViewState {
        ViewState::from_chart(self)
    }

    /// X tick values inside the visible range.
    pub fn x_ticks(&self) -> Vec<f64> {
        let v = self.view();
        self.x_axis.tick_values(v.x_min, v.x_max)
    }

    /// Y tick values inside the visible range.
    pub fn y_ticks(&self) -> Vec<f64> {
        let v = self.view();
        self.y_axis.tick_values(v.y_min, v.y_max)
    }
}
