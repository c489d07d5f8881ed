// File: crates/bench-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes bench-core charts on a CPU surface and writes PNG files.

use std::path::Path;

use anyhow::{Context, Result};
use bench_core::{Chart, PlotConfig, Renderer};
use skia_safe as skia;
use tracing::debug;

pub mod geometry;
pub mod png;
pub mod text;
pub mod theme;
pub mod types;
mod draw;

pub use text::TextShaper;
pub use theme::Theme;

pub struct RenderOptions {
    pub dpi: u32,
    /// Figure size in inches (width, height).
    pub figure_size: (f32, f32),
    pub theme: Theme,
    /// Text is skipped when false, which keeps output independent of installed fonts.
    pub draw_labels: bool,
}

impl RenderOptions {
    pub fn from_config(config: &PlotConfig) -> Self {
        Self {
            dpi: config.dpi,
            figure_size: config.figure_size,
            theme: Theme::default(),
            draw_labels: true,
        }
    }

    /// Surface size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let dpi = self.dpi as f32;
        ((self.figure_size.0 * dpi).round() as i32, (self.figure_size.1 * dpi).round() as i32)
    }

    /// Pixels per typographic point.
    pub fn px_per_pt(&self) -> f32 {
        self.dpi as f32 / types::PT_PER_INCH
    }
}

impl Default for RenderOptions {
    fn default() -> Self { Self::from_config(&PlotConfig::default()) }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, text: TextShaper::new() }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Render the chart and return PNG-encoded bytes tagged with the configured DPI.
    pub fn render_to_png_bytes(&self, chart: &Chart) -> Result<Vec<u8>> {
        let (width, height) = self.opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;

        let frame = draw::Frame {
            canvas: surface.canvas(),
            text: &self.text,
            theme: &self.opts.theme,
            k: self.opts.px_per_pt(),
            width: width as f32,
            height: height as f32,
            draw_labels: self.opts.draw_labels,
        };
        draw::draw_chart(&frame, chart);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        png::with_dpi(data.as_bytes(), self.opts.dpi)
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

impl Renderer for SkiaRenderer {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), dpi = self.opts.dpi, "saved png");
        Ok(())
    }
}
