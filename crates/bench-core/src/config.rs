// File: crates/bench-core/src/config.rs
// Summary: Presentation defaults shared by every benchmark chart.

use crate::error::ConfigError;

pub const X_LABEL: &str = "Buffer Size (Bytes)";
pub const Y_LABEL: &str = "Bandwidth (MiB/sec)";
pub const LEGEND_TITLE: &str = "Benchmark";
pub const Y_TICK_INTERVAL: f64 = 10_000.0;
pub const DPI: u32 = 240;
/// Figure size in inches (width, height).
pub const FIGURE_SIZE: (f32, f32) = (10.0, 6.0);

#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    /// Spacing of y major ticks, in MiB/sec.
    pub y_tick_interval: f64,
    pub dpi: u32,
    pub figure_size: (f32, f32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            legend_title: LEGEND_TITLE.to_string(),
            y_tick_interval: Y_TICK_INTERVAL,
            dpi: DPI,
            figure_size: FIGURE_SIZE,
        }
    }
}

impl PlotConfig {
    pub fn with_y_tick_interval(mut self, interval: f64) -> Result<Self, ConfigError> {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ConfigError::InvalidTickInterval(interval));
        }
        self.y_tick_interval = interval;
        Ok(self)
    }

    pub fn with_dpi(mut self, dpi: u32) -> Result<Self, ConfigError> {
        if dpi == 0 {
            return Err(ConfigError::InvalidDpi(dpi));
        }
        self.dpi = dpi;
        Ok(self)
    }
}
