// File: crates/bench-core/src/render.rs
// Summary: Renderer seam: turns a finished chart description into an image file.

use std::path::Path;

use anyhow::Result;

use crate::Chart;

/// Rasterizes and saves charts. Implementations keep no per-chart state between calls.
pub trait Renderer {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        (**self).render(chart, path)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        (**self).render(chart, path)
    }
}
