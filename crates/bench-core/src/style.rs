// File: crates/bench-core/src/style.rs
// Summary: Visual attributes of a trace: color, dash pattern, marker and opacity.

/// 8-bit RGB color; opacity lives on the trace, not the color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(((hex >> 16) & 0xff) as u8, ((hex >> 8) & 0xff) as u8, (hex & 0xff) as u8)
    }
}

/// Tableau-10 palette.
pub mod palette {
    use super::Rgb;

    pub const BLUE: Rgb = Rgb::from_hex(0x1f77b4);
    pub const ORANGE: Rgb = Rgb::from_hex(0xff7f0e);
    pub const GREEN: Rgb = Rgb::from_hex(0x2ca02c);
    pub const RED: Rgb = Rgb::from_hex(0xd62728);
    pub const PURPLE: Rgb = Rgb::from_hex(0x9467bd);
    pub const BROWN: Rgb = Rgb::from_hex(0x8c564b);
    pub const PINK: Rgb = Rgb::from_hex(0xe377c2);
    pub const GRAY: Rgb = Rgb::from_hex(0x7f7f7f);
    pub const OLIVE: Rgb = Rgb::from_hex(0xbcbd22);
    pub const CYAN: Rgb = Rgb::from_hex(0x17becf);
}

/// Stroke pattern. Dash lengths are in multiples of the line width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineStyle {
    Solid,
    Dashed { offset: f32, on: f32, off: f32 },
}

impl LineStyle {
    pub const fn dashed(on: f32, off: f32) -> Self {
        LineStyle::Dashed { offset: 0.0, on, off }
    }

    /// A dash pattern with no gap strokes like a solid line.
    pub fn is_solid(&self) -> bool {
        match *self {
            LineStyle::Solid => true,
            LineStyle::Dashed { on, off, .. } => off <= 0.0 || on <= 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Cross,
    TriangleDown,
    Circle,
    Square,
}

/// Everything needed to draw one line-plus-marker trace. Sizes are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceStyle {
    pub color: Rgb,
    pub line: LineStyle,
    pub line_width: f32,
    pub marker: Marker,
    pub marker_size: f32,
    pub alpha: f32,
}

impl TraceStyle {
    pub const DEFAULT_LINE_WIDTH: f32 = 1.5;

    pub const fn new(color: Rgb, line: LineStyle, marker: Marker) -> Self {
        Self {
            color,
            line,
            line_width: Self::DEFAULT_LINE_WIDTH,
            marker,
            marker_size: 4.0,
            alpha: 0.5,
        }
    }

    /// Opacity as an 8-bit alpha channel.
    pub fn alpha_u8(&self) -> u8 {
        (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_unpack() {
        assert_eq!(palette::BLUE, Rgb(0x1f, 0x77, 0xb4));
    }

    #[test]
    fn zero_gap_dash_is_solid() {
        assert!(LineStyle::dashed(2.0, 0.0).is_solid());
        assert!(!LineStyle::dashed(1.0, 1.0).is_solid());
        assert!(LineStyle::Solid.is_solid());
    }

    #[test]
    fn half_alpha_rounds_up() {
        let s = TraceStyle::new(palette::RED, LineStyle::Solid, Marker::Circle);
        assert_eq!(s.alpha_u8(), 128);
    }
}
