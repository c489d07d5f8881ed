// File: crates/bench-core/tests/table.rs
// Purpose: Tab-delimited loading in both orientations, plus every malformed-input error.

use bench_core::error::{Error, ParseError};
use bench_core::table::{self, Layout};

fn parse(text: &str) -> Result<bench_core::Table, ParseError> {
    table::load_from_reader(text.as_bytes(), Layout::Auto)
}

#[test]
fn header_layout_yields_one_series_per_column() {
    let text = "size\tmemcpy_mib_sec\tsynth_con_mib_sec\n\
                1024\t9000.5\t12000\n\
                2048\t9500\t13000\n\
                4096\t9800\t13500\n";
    let t = parse(text).expect("valid table");
    assert_eq!(t.len(), 3);
    assert_eq!(t.series_count(), 3);
    assert_eq!(t.x(), &[1024.0, 2048.0, 4096.0]);
    assert_eq!(t.get("memcpy_mib_sec"), Some(&[9000.5, 9500.0, 9800.0][..]));
    assert_eq!(t.names().collect::<Vec<_>>(), vec!["size", "memcpy_mib_sec", "synth_con_mib_sec"]);
}

#[test]
fn row_layout_yields_one_series_per_row() {
    let text = "size\t1024\t2048\t4096\nscan_abs_mib_sec\t1\t2\t3\n";
    let t = parse(text).expect("valid table");
    assert_eq!(t.len(), 3);
    assert_eq!(t.get("scan_abs_mib_sec"), Some(&[1.0, 2.0, 3.0][..]));
}

#[test]
fn every_series_has_one_entry_per_measurement_row() {
    for n in [1usize, 2, 7, 33] {
        let mut text = String::from("size\ta\tb\n");
        for i in 0..n {
            text.push_str(&format!("{}\t{}\t{}\n", 1 << (i % 20), i, i * 2));
        }
        let t = parse(&text).expect("valid table");
        assert_eq!(t.x().len(), n);
        for name in ["size", "a", "b"] {
            assert_eq!(t.get(name).map(<[f64]>::len), Some(n), "series {name} for n={n}");
        }
    }
}

#[test]
fn forced_layout_overrides_detection() {
    // Read as columns, the names would be `size`, `1` and `2`.
    let text = "size\t1\t2\nx\t3\t4\n";
    let t = table::load_from_reader(text.as_bytes(), Layout::Rows).expect("rows");
    assert_eq!(t.get("x"), Some(&[3.0, 4.0][..]));
    let err = table::load_from_reader(text.as_bytes(), Layout::Columns).unwrap_err();
    assert!(matches!(err, ParseError::NotNumeric { .. }), "{err:?}");
}

#[test]
fn missing_size_is_a_parse_error() {
    let err = parse("bytes\tscan_abs_mib_sec\n1024\t5\n").unwrap_err();
    assert!(matches!(err, ParseError::MissingSize), "{err:?}");
}

#[test]
fn ragged_rows_are_a_parse_error() {
    let err = parse("size\ta\n1024\t1\n2048\n").unwrap_err();
    match err {
        ParseError::Ragged { line, expected, found } => {
            assert_eq!(line, 3);
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected Ragged, got {other:?}"),
    }
}

#[test]
fn non_numeric_value_names_the_series() {
    let err = parse("size\ta\n1024\tfast\n").unwrap_err();
    match err {
        ParseError::NotNumeric { series, index, value } => {
            assert_eq!(series, "a");
            assert_eq!(index, 0);
            assert_eq!(value, "fast");
        }
        other => panic!("expected NotNumeric, got {other:?}"),
    }
}

#[test]
fn duplicate_and_empty_names_are_rejected() {
    assert!(matches!(parse("size\ta\ta\n1\t2\t3\n"), Err(ParseError::DuplicateSeries(n)) if n == "a"));
    assert!(matches!(parse("size\t\n1\t2\n"), Err(ParseError::EmptyName(1))));
    assert!(matches!(parse(""), Err(ParseError::Empty)));
}

#[test]
fn values_are_trimmed_and_blank_lines_skipped() {
    let t = parse("size\ta\n 1024 \t 3.5\n\n2048\t4\n").expect("valid table");
    assert_eq!(t.get("a"), Some(&[3.5, 4.0][..]));
}

#[test]
fn require_reports_chart_and_series() {
    let t = parse("size\ta\n1\t2\n").expect("valid table");
    let err = t.require("scan_rel_mib_sec", "zvec-scan-block-64").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("scan_rel_mib_sec") && msg.contains("zvec-scan-block-64"), "{msg}");
}

#[test]
fn load_reads_from_disk_and_reports_missing_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bench.dat");
    std::fs::write(&path, "size\ta\n1024\t1\n2048\t2\n").expect("write fixture");
    let t = table::load(&path).expect("load");
    assert_eq!(t.len(), 2);

    let err = table::load(dir.path().join("missing.dat")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "{err:?}");
}
