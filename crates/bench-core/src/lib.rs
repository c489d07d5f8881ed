// File: crates/bench-core/src/lib.rs
// Summary: Core library entry point; table loading, chart registry and the renderer-agnostic chart model.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod scale;
pub mod series;
pub mod style;
pub mod table;
pub mod view;

pub use axis::{Axis, ScaleKind, Ticks};
pub use chart::{Chart, Legend, LegendLocation};
pub use config::PlotConfig;
pub use error::{ConfigError, DataError, Error, ParseError};
pub use output::OutputPattern;
pub use pipeline::{build_chart, render_families};
pub use registry::{ChartDefinition, Family};
pub use render::Renderer;
pub use scale::Scale;
pub use series::{SeriesStyle, Trace};
pub use style::{LineStyle, Marker, Rgb, TraceStyle};
pub use table::{Layout, Table};
pub use view::ViewState;
