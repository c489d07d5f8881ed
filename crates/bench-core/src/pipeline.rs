// File: crates/bench-core/src/pipeline.rs
// Summary: Family → chart definition → chart → rendered file.
// Notes:
// - Every requested chart is built before the first file is written, so a table
//   missing a column for any family leaves no partial output behind.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::axis::{Axis, Ticks};
use crate::chart::{Chart, Legend};
use crate::config::PlotConfig;
use crate::error::{DataError, Error};
use crate::output::OutputPattern;
use crate::registry::{ChartDefinition, Family};
use crate::render::Renderer;
use crate::series::Trace;
use crate::table::Table;

/// Build the chart for `def` from `table`. Fails on the first series the table lacks.
pub fn build_chart(table: &Table, def: &ChartDefinition) -> Result<Chart, DataError> {
    let xs = table.x();
    let x_axis = Axis::new(def.x_label.clone(), def.x_scale).with_ticks(Ticks::Fixed(xs.to_vec()));
    let y_axis = Axis::new(def.y_label.clone(), def.y_scale).with_ticks(Ticks::Multiple(def.y_tick_interval));

    let mut chart = Chart::new(def.title.clone(), x_axis, y_axis).with_legend(Legend::new(def.legend_title.clone()));
    for s in &def.series {
        let ys = table.require(s.key, &def.title)?;
        chart.add_trace(Trace::from_columns(s.label, xs, ys, s.style));
    }
    Ok(chart)
}

/// A built chart and the file it goes to.
#[derive(Clone, Debug)]
pub struct PlannedChart {
    pub family: Family,
    pub chart: Chart,
    pub path: PathBuf,
}

/// Resolve and build charts for `families` without touching the filesystem.
pub fn plan(
    table: &Table,
    families: &[Family],
    selector: u32,
    pattern: &OutputPattern,
    config: &PlotConfig,
) -> Result<Vec<PlannedChart>, Error> {
    families
        .iter()
        .map(|&family| -> Result<PlannedChart, Error> {
            let def = ChartDefinition::resolve(family, selector, config)?;
            let chart = build_chart(table, &def)?;
            let path = pattern.resolve(def.output_key);
            debug!(%family, title = %chart.title, traces = chart.traces.len(), path = %path.display(), "built chart");
            Ok(PlannedChart { family, chart, path })
        })
        .collect()
}

/// Render a single family. Returns the written path.
pub fn render<R: Renderer + ?Sized>(
    table: &Table,
    family: Family,
    selector: u32,
    pattern: &OutputPattern,
    config: &PlotConfig,
    renderer: &R,
) -> Result<PathBuf, Error> {
    let mut paths = render_families(table, &[family], selector, pattern, config, renderer)?;
    Ok(paths.remove(0))
}

/// Build every requested chart, then render each in order. Returns the written paths.
pub fn render_families<R: Renderer + ?Sized>(
    table: &Table,
    families: &[Family],
    selector: u32,
    pattern: &OutputPattern,
    config: &PlotConfig,
    renderer: &R,
) -> Result<Vec<PathBuf>, Error> {
    let planned = plan(table, families, selector, pattern, config)?;
    let mut written = Vec::with_capacity(planned.len());
    for p in planned {
        renderer
            .render(&p.chart, &p.path)
            .map_err(|e| Error::Render { path: p.path.clone(), source: e.into() })?;
        info!(family = %p.family, path = %p.path.display(), "wrote chart");
        written.push(p.path);
    }
    Ok(written)
}
