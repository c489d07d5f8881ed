// File: crates/bench-render-skia/src/types.rs
// Summary: Point-based typographic constants and the plot-area insets.

/// Points per inch; sizes in points scale by `dpi / PT_PER_INCH` to pixels.
pub const PT_PER_INCH: f32 = 72.0;

pub const TICK_FONT_PT: f32 = 10.0;
pub const TICK_LEN_PT: f32 = 3.5;
pub const TICK_PAD_PT: f32 = 3.5;
pub const TICK_WIDTH_PT: f32 = 0.8;
pub const LABEL_FONT_PT: f32 = 12.0;
pub const LABEL_PAD_PT: f32 = 12.0;
pub const TITLE_FONT_PT: f32 = 12.0;
pub const TITLE_PAD_PT: f32 = 12.0;
pub const FRAME_WIDTH_PT: f32 = 0.8;
/// Blank border around everything (tight layout padding).
pub const OUTER_PAD_PT: f32 = 10.8;

pub const LEGEND_FONT_PT: f32 = 9.0;
pub const LEGEND_TITLE_PT: f32 = 10.5;

/// Plot-area margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}
