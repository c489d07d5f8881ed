// File: crates/bench-core/tests/pipeline.rs
// Purpose: End-to-end chart building and rendering through a recording renderer.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use bench_core::axis::MAX_TICKS;
use bench_core::error::{DataError, Error};
use bench_core::pipeline::{self, build_chart};
use bench_core::table::{self, Layout};
use bench_core::{Chart, ChartDefinition, Family, OutputPattern, PlotConfig, Renderer, Table, Ticks};

/// Records every chart and writes a placeholder file so filesystem effects can be checked.
#[derive(Default)]
struct Recorder {
    charts: RefCell<Vec<(Chart, PathBuf)>>,
}

impl Renderer for Recorder {
    fn render(&self, chart: &Chart, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, chart.title.as_bytes())?;
        self.charts.borrow_mut().push((chart.clone(), path.to_path_buf()));
        Ok(())
    }
}

struct Failing;

impl Renderer for Failing {
    fn render(&self, _chart: &Chart, _path: &Path) -> anyhow::Result<()> {
        anyhow::bail!("surface unavailable")
    }
}

fn scan_table() -> Table {
    let text = "size\tscan_abs_mib_sec\tscan_rel_mib_sec\tscan_both_mib_sec\n\
                1024\t11000\t9000\t7000\n\
                2048\t12000\t9500\t7400\n\
                4096\t12500\t9900\t7600\n";
    table::load_from_reader(text.as_bytes(), Layout::Auto).expect("scan table")
}

/// Every column the four families can ask for at width 64.
fn full_table() -> Table {
    let mut names = vec!["size".to_string()];
    for f in Family::ALL {
        let def = ChartDefinition::resolve(f, 64, &PlotConfig::default()).expect("resolve");
        names.extend(def.series.iter().map(|s| s.key.to_string()));
    }
    let series = names.into_iter().enumerate().map(|(i, n)| {
        let values = if i == 0 { vec![1024.0, 2048.0, 4096.0] } else { vec![i as f64 * 1000.0; 3] };
        (n, values)
    });
    Table::from_series(series).expect("full table")
}

#[test]
fn scan_family_renders_one_file_with_three_traces() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pattern = OutputPattern::parse(&format!("{}/images/bench-%s-64.png", dir.path().display())).expect("pattern");
    let recorder = Recorder::default();

    let path = pipeline::render(&scan_table(), Family::Scan, 64, &pattern, &PlotConfig::default(), &recorder)
        .expect("render scan");

    assert_eq!(path, dir.path().join("images/bench-zvec-scan-64.png"));
    assert!(path.exists());
    let files: Vec<_> = std::fs::read_dir(dir.path().join("images")).expect("read dir").collect();
    assert_eq!(files.len(), 1);

    let charts = recorder.charts.borrow();
    assert_eq!(charts.len(), 1);
    let (chart, _) = &charts[0];
    assert_eq!(chart.title, "zvec-scan-block-64");
    assert_eq!(chart.traces.len(), 3);
    assert_eq!(chart.x_ticks(), vec![1024.0, 2048.0, 4096.0]);
    assert_eq!(chart.x_axis.ticks, Ticks::Fixed(vec![1024.0, 2048.0, 4096.0]));
    assert_eq!(chart.legend.as_ref().map(|l| l.title.as_str()), Some("Benchmark"));
    assert_eq!(chart.legend_labels(), vec!["scan-abs", "scan-rel", "scan-both"]);
    assert_eq!(chart.traces[1].points, vec![(1024.0, 9000.0), (2048.0, 9500.0), (4096.0, 9900.0)]);
}

#[test]
fn y_ticks_fall_on_the_configured_interval() {
    let def = ChartDefinition::resolve(Family::Scan, 64, &PlotConfig::default()).expect("resolve");
    let chart = build_chart(&scan_table(), &def).expect("build");
    let ticks = chart.y_ticks();
    assert!(!ticks.is_empty());
    assert!(ticks.iter().all(|t| t % 10_000.0 == 0.0), "{ticks:?}");
}

#[test]
fn missing_series_aborts_before_any_file_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pattern = OutputPattern::parse(&format!("{}/bench-%s.png", dir.path().display())).expect("pattern");
    let recorder = Recorder::default();

    // Scan is satisfiable, synth is not.
    let err = pipeline::render_families(
        &scan_table(),
        &[Family::Scan, Family::Synth],
        64,
        &pattern,
        &PlotConfig::default(),
        &recorder,
    )
    .unwrap_err();

    match err {
        Error::Data(DataError::MissingSeries { chart, series }) => {
            assert_eq!(chart, "zvec-synthesize-block-64");
            assert_eq!(series, "memcpy_mib_sec");
        }
        other => panic!("expected DataError, got {other:?}"),
    }
    assert!(recorder.charts.borrow().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[test]
fn all_families_render_in_request_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pattern = OutputPattern::parse(&format!("{}/bench-%s-64.png", dir.path().display())).expect("pattern");
    let recorder = Recorder::default();

    let paths = pipeline::render_families(&full_table(), &Family::ALL, 64, &pattern, &PlotConfig::default(), &recorder)
        .expect("render all");

    let names: Vec<_> = paths.iter().filter_map(|p| p.file_name()).map(|n| n.to_string_lossy().into_owned()).collect();
    assert_eq!(
        names,
        ["bench-zvec-scan-64.png", "bench-zvec-synth-64.png", "bench-zvec-encode-64.png", "bench-zvec-decode-64.png"]
    );
    let traces: Vec<_> = recorder.charts.borrow().iter().map(|(c, _)| c.traces.len()).collect();
    assert_eq!(traces, [3, 3, 10, 10]);
}

#[test]
fn narrow_selector_skips_wide_columns() {
    // A table without 32/48-bit columns is fine when the selector is not 64.
    let mut series = vec![("size".to_string(), vec![64.0, 128.0])];
    for w in [8, 16, 24] {
        for kind in ["rel", "abs"] {
            series.push((format!("encode_{kind}_{w}_mib_sec"), vec![1.0, 2.0]));
        }
    }
    let table = Table::from_series(series).expect("table");
    let def = ChartDefinition::resolve(Family::Encode, 32, &PlotConfig::default()).expect("resolve");
    assert_eq!(build_chart(&table, &def).expect("build").traces.len(), 6);

    let wide = ChartDefinition::resolve(Family::Encode, 64, &PlotConfig::default()).expect("resolve");
    assert!(build_chart(&table, &wide).is_err());
}

#[test]
fn renderer_failure_is_reported_with_path() {
    let pattern = OutputPattern::parse("out/%s.png").expect("pattern");
    let err = pipeline::render(&scan_table(), Family::Scan, 64, &pattern, &PlotConfig::default(), &Failing)
        .unwrap_err();
    match err {
        Error::Render { path, source } => {
            assert_eq!(path, PathBuf::from("out/zvec-scan.png"));
            assert!(source.to_string().contains("surface unavailable"));
        }
        other => panic!("expected Render, got {other:?}"),
    }
}

#[test]
fn tiny_tick_interval_stays_within_the_tick_cap() {
    let config = PlotConfig::default().with_y_tick_interval(1e-6).expect("config");
    let def = ChartDefinition::resolve(Family::Scan, 64, &config).expect("resolve");
    let chart = build_chart(&scan_table(), &def).expect("build");
    let ticks = chart.y_ticks();
    assert!(!ticks.is_empty());
    assert!(ticks.len() <= MAX_TICKS, "{} ticks", ticks.len());
}

#[test]
fn huge_bandwidth_value_stays_within_the_tick_cap() {
    let text = "size\tscan_abs_mib_sec\tscan_rel_mib_sec\tscan_both_mib_sec\n\
                1024\t11000\t9000\t7000\n\
                2048\t1e13\t9500\t7400\n";
    let table = table::load_from_reader(text.as_bytes(), Layout::Auto).expect("table");
    let def = ChartDefinition::resolve(Family::Scan, 64, &PlotConfig::default()).expect("resolve");
    let ticks = build_chart(&table, &def).expect("build").y_ticks();
    assert!(ticks.len() <= MAX_TICKS, "{} ticks", ticks.len());
    assert!(ticks.iter().all(|t| (t / 10_000.0).fract() == 0.0));
}
