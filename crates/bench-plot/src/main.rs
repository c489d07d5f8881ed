// File: crates/bench-plot/src/main.rs
// Summary: Loads a tab-delimited benchmark table and renders the scan/synth/encode/decode charts to PNGs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bench_core::{pipeline, table, Family, Layout, OutputPattern, PlotConfig};
use bench_render_skia::{RenderOptions, SkiaRenderer, Theme};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "plots benchmark charts", long_about = None)]
struct Cli {
    /// Tab-delimited benchmark table
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input_file: PathBuf,

    /// Block width the benchmark ran with; 64 adds the 32- and 48-bit series
    #[arg(short = 't', long)]
    bench_type: u32,

    /// Output filename pattern with one `%s` for the chart key, e.g. images/bench-%s-64.png
    #[arg(short, long, value_parser = parse_pattern)]
    output_pattern: OutputPattern,

    /// Chart families to render (scan, synth, encode, decode); defaults to all
    #[arg(short, long = "family", value_parser = parse_family, action = ArgAction::Append)]
    families: Vec<Family>,

    /// Orientation of the input table
    #[arg(long, value_enum, env = "ZVEC_PLOT_LAYOUT", default_value_t = LayoutArg::Auto)]
    layout: LayoutArg,

    /// Output resolution
    #[arg(long, env = "ZVEC_PLOT_DPI", default_value_t = bench_core::config::DPI)]
    dpi: u32,

    /// Color theme
    #[arg(long, value_enum, env = "ZVEC_PLOT_THEME", default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    /// Spacing of the y-axis major ticks in MiB/sec
    #[arg(long = "y-tick", env = "ZVEC_PLOT_Y_TICK", default_value_t = bench_core::config::Y_TICK_INTERVAL)]
    y_tick: f64,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    Auto,
    Columns,
    Rows,
}

impl From<LayoutArg> for Layout {
    fn from(l: LayoutArg) -> Self {
        match l {
            LayoutArg::Auto => Layout::Auto,
            LayoutArg::Columns => Layout::Columns,
            LayoutArg::Rows => Layout::Rows,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Light => Theme::light(),
            ThemeArg::Dark => Theme::dark(),
        }
    }
}

fn parse_pattern(s: &str) -> Result<OutputPattern, String> {
    OutputPattern::parse(s).map_err(|e| e.to_string())
}

fn parse_family(s: &str) -> Result<Family, String> {
    s.parse::<Family>().map_err(|e| e.to_string())
}

impl Cli {
    fn families(&self) -> Vec<Family> {
        if self.families.is_empty() {
            Family::ALL.to_vec()
        } else {
            self.families.clone()
        }
    }

    fn plot_config(&self) -> Result<PlotConfig> {
        Ok(PlotConfig::default().with_dpi(self.dpi)?.with_y_tick_interval(self.y_tick)?)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    let config = cli.plot_config()?;

    let table = table::load_with(&cli.input_file, cli.layout.into())
        .with_context(|| format!("failed to load '{}'", cli.input_file.display()))?;
    info!(
        input = %cli.input_file.display(),
        series = table.series_count(),
        points = table.len(),
        "loaded benchmark table"
    );

    let mut opts = RenderOptions::from_config(&config);
    opts.theme = cli.theme.into();
    let families = cli.families();
    debug!(?families, bench_type = cli.bench_type, pattern = %cli.output_pattern, theme = opts.theme.name, "rendering");
    let renderer = SkiaRenderer::new(opts);

    let written = pipeline::render_families(&table, &families, cli.bench_type, &cli.output_pattern, &config, &renderer)?;
    Ok(written)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
