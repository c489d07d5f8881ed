// File: crates/bench-core/src/registry.rs
// Summary: Static registry of the four benchmark chart families and their series styles.

use std::fmt;
use std::str::FromStr;

use crate::axis::ScaleKind;
use crate::config::PlotConfig;
use crate::error::ConfigError;
use crate::output::format_title;
use crate::series::SeriesStyle;
use crate::style::{palette, LineStyle, Marker, TraceStyle};

/// Block width that enables the 32- and 48-bit series.
pub const WIDE_BLOCK: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Scan,
    Synth,
    Encode,
    Decode,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Scan, Family::Synth, Family::Encode, Family::Decode];

    pub fn name(self) -> &'static str {
        match self {
            Family::Scan => "scan",
            Family::Synth => "synth",
            Family::Encode => "encode",
            Family::Decode => "decode",
        }
    }

    pub fn output_key(self) -> &'static str { template(self).output_key }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Family {
    type Err = ConfigError;

    /// Accepts family names, `synthesize`, and the output keys, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("zvec-").unwrap_or(&lower);
        match name {
            "scan" => Ok(Family::Scan),
            "synth" | "synthesize" => Ok(Family::Synth),
            "encode" => Ok(Family::Encode),
            "decode" => Ok(Family::Decode),
            _ => Err(ConfigError::UnknownFamily(s.to_string())),
        }
    }
}

/// Registry entry: everything about a chart that does not depend on the selector.
#[derive(Debug)]
pub struct ChartTemplate {
    pub family: Family,
    /// Title with one `%d` for the selector.
    pub title: &'static str,
    pub output_key: &'static str,
    pub series: &'static [SeriesStyle],
}

/// A chart resolved for one selector value.
#[derive(Clone, Debug)]
pub struct ChartDefinition {
    pub family: Family,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: ScaleKind,
    pub y_scale: ScaleKind,
    pub y_tick_interval: f64,
    pub legend_title: String,
    pub series: Vec<SeriesStyle>,
    pub output_key: &'static str,
}

impl ChartDefinition {
    /// Materialize the registry entry for `family` at `selector`.
    pub fn resolve(family: Family, selector: u32, config: &PlotConfig) -> Result<Self, ConfigError> {
        let t = template(family);
        Ok(Self {
            family,
            title: format_title(t.title, selector)?,
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            x_scale: ScaleKind::Log2,
            y_scale: ScaleKind::Linear,
            y_tick_interval: config.y_tick_interval,
            legend_title: config.legend_title.clone(),
            series: t.series.iter().filter(|s| s.is_included(selector)).copied().collect(),
            output_key: t.output_key,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.series.iter().map(|s| s.label)
    }
}

pub fn template(family: Family) -> &'static ChartTemplate {
    match family {
        Family::Scan => &REGISTRY[0],
        Family::Synth => &REGISTRY[1],
        Family::Encode => &REGISTRY[2],
        Family::Decode => &REGISTRY[3],
    }
}

pub static REGISTRY: [ChartTemplate; 4] = [
    ChartTemplate { family: Family::Scan, title: "zvec-scan-block-%d", output_key: "zvec-scan", series: &SCAN },
    ChartTemplate { family: Family::Synth, title: "zvec-synthesize-block-%d", output_key: "zvec-synth", series: &SYNTH },
    ChartTemplate { family: Family::Encode, title: "zvec-encode-block-%d", output_key: "zvec-encode", series: &ENCODE },
    ChartTemplate { family: Family::Decode, title: "zvec-decode-block-%d", output_key: "zvec-decode", series: &DECODE },
];

fn wide_only(selector: u32) -> bool { selector == WIDE_BLOCK }

const fn solid(color: crate::style::Rgb, marker: Marker) -> TraceStyle {
    TraceStyle::new(color, LineStyle::Solid, marker)
}

const fn dashed(color: crate::style::Rgb, on: f32, off: f32, marker: Marker) -> TraceStyle {
    TraceStyle::new(color, LineStyle::dashed(on, off), marker)
}

static SCAN: [SeriesStyle; 3] = [
    SeriesStyle::new("scan_abs_mib_sec", "scan-abs", solid(palette::CYAN, Marker::Cross)),
    SeriesStyle::new("scan_rel_mib_sec", "scan-rel", solid(palette::BLUE, Marker::Cross)),
    SeriesStyle::new("scan_both_mib_sec", "scan-both", solid(palette::GRAY, Marker::Cross)),
];

static SYNTH: [SeriesStyle; 3] = [
    SeriesStyle::new("memcpy_mib_sec", "memcpy", solid(palette::PINK, Marker::TriangleDown)),
    SeriesStyle::new("synth_con_mib_sec", "synth-const", solid(palette::OLIVE, Marker::TriangleDown)),
    SeriesStyle::new("synth_seq_mib_sec", "synth-seq", solid(palette::CYAN, Marker::TriangleDown)),
];

static ENCODE: [SeriesStyle; 10] = [
    SeriesStyle::new("encode_rel_8_mib_sec", "encode-rel-8", dashed(palette::ORANGE, 1.0, 1.0, Marker::Circle)),
    SeriesStyle::new("encode_rel_16_mib_sec", "encode-rel-16", dashed(palette::GREEN, 1.0, 1.0, Marker::Circle)),
    SeriesStyle::new("encode_rel_24_mib_sec", "encode-rel-24", dashed(palette::RED, 1.0, 1.0, Marker::Circle)),
    SeriesStyle::new("encode_rel_32_mib_sec", "encode-rel-32", dashed(palette::PURPLE, 1.0, 1.0, Marker::Circle)).when(wide_only),
    SeriesStyle::new("encode_rel_48_mib_sec", "encode-rel-48", dashed(palette::BROWN, 1.0, 1.0, Marker::Circle)).when(wide_only),
    SeriesStyle::new("encode_abs_8_mib_sec", "encode-abs-8", dashed(palette::ORANGE, 2.0, 1.0, Marker::Square)),
    SeriesStyle::new("encode_abs_16_mib_sec", "encode-abs-16", dashed(palette::GREEN, 2.0, 1.0, Marker::Square)),
    SeriesStyle::new("encode_abs_24_mib_sec", "encode-abs-24", dashed(palette::RED, 2.0, 1.0, Marker::Square)),
    SeriesStyle::new("encode_abs_32_mib_sec", "encode-abs-32", dashed(palette::PURPLE, 2.0, 1.0, Marker::Square)).when(wide_only),
    SeriesStyle::new("encode_abs_48_mib_sec", "encode-abs-48", dashed(palette::BROWN, 2.0, 1.0, Marker::Square)).when(wide_only),
];

// Zero-gap dashes stroke as solid lines.
static DECODE: [SeriesStyle; 10] = [
    SeriesStyle::new("decode_rel_8_mib_sec", "decode-rel-8", dashed(palette::ORANGE, 1.0, 0.0, Marker::Circle)),
    SeriesStyle::new("decode_rel_16_mib_sec", "decode-rel-16", dashed(palette::GREEN, 1.0, 0.0, Marker::Circle)),
    SeriesStyle::new("decode_rel_24_mib_sec", "decode-rel-24", dashed(palette::RED, 1.0, 0.0, Marker::Circle)),
    SeriesStyle::new("decode_rel_32_mib_sec", "decode-rel-32", dashed(palette::PURPLE, 1.0, 0.0, Marker::Circle)).when(wide_only),
    SeriesStyle::new("decode_rel_48_mib_sec", "decode-rel-48", dashed(palette::BROWN, 1.0, 0.0, Marker::Circle)).when(wide_only),
    SeriesStyle::new("decode_abs_8_mib_sec", "decode-abs-8", dashed(palette::ORANGE, 2.0, 0.0, Marker::Square)),
    SeriesStyle::new("decode_abs_16_mib_sec", "decode-abs-16", dashed(palette::GREEN, 2.0, 0.0, Marker::Square)),
    SeriesStyle::new("decode_abs_24_mib_sec", "decode-abs-24", dashed(palette::RED, 2.0, 0.0, Marker::Square)),
    SeriesStyle::new("decode_abs_32_mib_sec", "decode-abs-32", dashed(palette::PURPLE, 2.0, 0.0, Marker::Square)).when(wide_only),
    SeriesStyle::new("decode_abs_48_mib_sec", "decode-abs-48", dashed(palette::BROWN, 2.0, 0.0, Marker::Square)).when(wide_only),
];
