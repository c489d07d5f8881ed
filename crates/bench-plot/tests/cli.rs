// File: crates/bench-plot/tests/cli.rs
// Purpose: Runs the built `plot-bench` binary and checks exit status, stderr and files on disk.

use std::path::Path;
use std::process::{Command, Output};

const SCAN: &str = "size\tscan_abs_mib_sec\tscan_rel_mib_sec\tscan_both_mib_sec\n\
                    1024\t11000\t9000\t7000\n\
                    2048\t12000\t9500\t7400\n\
                    4096\t12500\t9900\t7600\n";

fn plot_bench(input: &Path, out_dir: &Path, extra: &[&str]) -> Output {
    let pattern = out_dir.join("bench-%s-64.png");
    Command::new(env!("CARGO_BIN_EXE_plot-bench"))
        .arg("-i")
        .arg(input)
        .args(["-t", "64", "-o"])
        .arg(&pattern)
        .args(["--dpi", "20"])
        .args(extra)
        .env_remove("RUST_LOG")
        .env_remove("ZVEC_PLOT_LAYOUT")
        .env_remove("ZVEC_PLOT_DPI")
        .env_remove("ZVEC_PLOT_THEME")
        .env_remove("ZVEC_PLOT_Y_TICK")
        .output()
        .expect("spawn plot-bench")
}

fn write_table(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("bench.dat");
    std::fs::write(&path, text).expect("write table");
    path
}

fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).expect("read dir").count()
}

#[test]
fn scan_table_writes_the_resolved_file() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let out_dir = tempfile::tempdir().expect("tempdir");
    let input = write_table(input_dir.path(), SCAN);

    let out = plot_bench(&input, out_dir.path(), &["-f", "scan"]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let png = out_dir.path().join("bench-zvec-scan-64.png");
    let bytes = std::fs::read(&png).expect("png written");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
    assert_eq!(entries(out_dir.path()), 1);
}

#[test]
fn ragged_table_exits_with_status_one() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let out_dir = tempfile::tempdir().expect("tempdir");
    let input = write_table(input_dir.path(), "size\tscan_abs_mib_sec\tscan_rel_mib_sec\tscan_both_mib_sec\n\
                                               1024\t11000\t9000\t7000\n\
                                               2048\t12000\n");

    let out = plot_bench(&input, out_dir.path(), &["-f", "scan"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error: failed to load"), "{stderr}");
    assert!(stderr.contains("line 3 has 2 fields, expected 4"), "{stderr}");
    assert_eq!(entries(out_dir.path()), 0);
}

#[test]
fn missing_series_exits_with_status_one_and_writes_nothing() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let out_dir = tempfile::tempdir().expect("tempdir");
    let input = write_table(input_dir.path(), SCAN);

    // Scan is complete, but synth's columns are absent.
    let out = plot_bench(&input, out_dir.path(), &["-f", "scan", "-f", "synth"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("chart `zvec-synthesize-block-64` requires series `memcpy_mib_sec`"), "{stderr}");
    assert_eq!(entries(out_dir.path()), 0);
}

#[test]
fn unknown_family_is_rejected_and_writes_nothing() {
    let input_dir = tempfile::tempdir().expect("tempdir");
    let out_dir = tempfile::tempdir().expect("tempdir");
    let input = write_table(input_dir.path(), SCAN);

    let out = plot_bench(&input, out_dir.path(), &["-f", "bogus"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown benchmark family `bogus`"), "{stderr}");
    assert_eq!(entries(out_dir.path()), 0);
}
