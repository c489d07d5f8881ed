// File: crates/bench-render-skia/src/text.rs
// Summary: Text shaping and placement using Skia textlayout with system font fallback.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const FAMILIES: &[&str] = &["DejaVu Sans", "Helvetica", "Arial", "Segoe UI", "Roboto", "sans-serif"];

/// Horizontal anchor of a text box relative to the given x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(FAMILIES);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(100_000.0);
        paragraph
    }

    /// (width, height) of a single line of text.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw `text` with its top edge at `top`, anchored horizontally at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color, anchor: Anchor) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw `text` rotated 90° counter-clockwise, centered vertically on `cy`,
    /// with its (rotated) top edge at `left`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, left: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((left, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, 0.0));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
