// File: crates/bench-core/src/error.rs
// Summary: Error taxonomy for loading tables, resolving charts and rendering them.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed, ragged or non-numeric input table.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read table")]
    Read(#[from] csv::Error),
    #[error("table is empty")]
    Empty,
    #[error("line {line} has {found} fields, expected {expected}")]
    Ragged { line: usize, expected: usize, found: usize },
    #[error("series `{series}`: value {value:?} at index {index} is not a number")]
    NotNumeric { series: String, index: usize, value: String },
    #[error("series `{series}` has {found} values, expected {expected}")]
    LengthMismatch { series: String, expected: usize, found: usize },
    #[error("series `{0}` appears more than once")]
    DuplicateSeries(String),
    #[error("series name at position {0} is empty")]
    EmptyName(usize),
    #[error("required series `size` is missing")]
    MissingSize,
}

/// Unrecognized family or malformed presentation/output settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown benchmark family `{0}` (expected scan, synth, encode or decode)")]
    UnknownFamily(String),
    #[error("bad output pattern {pattern:?}: {reason}")]
    BadPattern { pattern: String, reason: &'static str },
    #[error("y tick interval must be finite and positive, got {0}")]
    InvalidTickInterval(f64),
    #[error("dpi must be positive, got {0}")]
    InvalidDpi(u32),
}

/// A chart needs a series the loaded table does not have.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("chart `{chart}` requires series `{series}`, which is not in the table")]
    MissingSeries { chart: String, series: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
