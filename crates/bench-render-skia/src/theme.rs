// File: crates/bench-render-skia/src/theme.rs
// Summary: Light/Dark theming for figure chrome (trace colors come from the chart).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White figure, black frame, light gray grid.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 60, 60, 68),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(220, 30, 30, 36),
            legend_border: skia::Color::from_argb(255, 80, 80, 90),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}
