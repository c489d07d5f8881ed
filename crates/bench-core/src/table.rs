// File: crates/bench-core/src/table.rs
// Summary: Tab-delimited benchmark table loader producing named numeric series.
// Notes:
// - The benchmark harness writes a header row of series names followed by one row
//   per buffer size. The transposed form (one series per row) is accepted as well.
// - Lookups that a chart depends on go through `require`, which turns a miss into
//   a `DataError` instead of an empty trace.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{DataError, Error, ParseError};

/// Name of the series holding the shared x-axis (buffer size in bytes).
pub const X_SERIES: &str = "size";

/// Orientation of the input text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// `Columns` when the whole first row is non-numeric, `Rows` otherwise.
    #[default]
    Auto,
    /// First row holds the names, each column is one series.
    Columns,
    /// First field of each row is the name, the rest are its values.
    Rows,
}

/// Immutable mapping from series name to values, in file order.
/// Contract: names are unique, all series have the same length and `size` is present.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
    points: usize,
}

impl Table {
    /// Build a table from `(name, values)` pairs, enforcing the table invariants.
    pub fn from_series<I, S>(series: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut columns: Vec<Vec<f64>> = Vec::new();
        let mut index = HashMap::new();

        for (pos, (name, values)) in series.into_iter().enumerate() {
            let name: String = name.into();
            if name.is_empty() {
                return Err(ParseError::EmptyName(pos));
            }
            if let Some(first) = columns.first() {
                if first.len() != values.len() {
                    return Err(ParseError::LengthMismatch {
                        series: name,
                        expected: first.len(),
                        found: values.len(),
                    });
                }
            }
            if index.insert(name.clone(), pos).is_some() {
                return Err(ParseError::DuplicateSeries(name));
            }
            names.push(name);
            columns.push(values);
        }

        if !index.contains_key(X_SERIES) {
            return Err(ParseError::MissingSize);
        }
        let points = columns.first().map_or(0, Vec::len);
        Ok(Self { names, columns, index, points })
    }

    /// Number of measurement points (length of every series).
    pub fn len(&self) -> usize { self.points }

    pub fn is_empty(&self) -> bool { self.points == 0 }

    pub fn series_count(&self) -> usize { self.names.len() }

    /// Series names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    /// Look up a series a chart cannot be drawn without.
    pub fn require(&self, name: &str, chart: &str) -> Result<&[f64], DataError> {
        self.get(name).ok_or_else(|| DataError::MissingSeries {
            chart: chart.to_string(),
            series: name.to_string(),
        })
    }

    /// The shared x-axis values.
    pub fn x(&self) -> &[f64] {
        &self.columns[self.index[X_SERIES]]
    }
}

/// Load a table from `path`, detecting the orientation.
pub fn load(path: impl AsRef<Path>) -> Result<Table, Error> {
    load_with(path, Layout::Auto)
}

pub fn load_with(path: impl AsRef<Path>, layout: Layout) -> Result<Table, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let table = load_from_reader(file, layout)?;
    debug!(
        path = %path.display(),
        series = table.series_count(),
        points = table.len(),
        "loaded benchmark table"
    );
    Ok(table)
}

/// Parse tab-delimited text from any reader.
pub fn load_from_reader<R: Read>(reader: R, layout: Layout) -> Result<Table, ParseError> {
    let rows = read_rows(reader)?;
    let first = rows.first().ok_or(ParseError::Empty)?;

    let layout = match layout {
        Layout::Auto => detect_layout(first),
        other => other,
    };
    let raw = match layout {
        Layout::Columns => transpose(rows),
        _ => rows,
    };

    let mut series = Vec::with_capacity(raw.len());
    for (pos, mut cells) in raw.into_iter().enumerate() {
        if cells.is_empty() {
            return Err(ParseError::EmptyName(pos));
        }
        let name = cells.remove(0).trim().to_string();
        if name.is_empty() {
            return Err(ParseError::EmptyName(pos));
        }
        let mut values = Vec::with_capacity(cells.len());
        for (index, cell) in cells.into_iter().enumerate() {
            match parse_number(&cell) {
                Some(v) => values.push(v),
                None => {
                    return Err(ParseError::NotNumeric { series: name, index, value: cell });
                }
            }
        }
        series.push((name, values));
    }
    Table::from_series(series)
}

fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>, ParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        if let Some(first) = rows.first() {
            if record.len() != first.len() {
                let line = record.position().map_or(i + 1, |p| p.line() as usize);
                return Err(ParseError::Ragged { line, expected: first.len(), found: record.len() });
            }
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn detect_layout(first_row: &[String]) -> Layout {
    if first_row.iter().all(|c| parse_number(c).is_none()) {
        Layout::Columns
    } else {
        Layout::Rows
    }
}

fn transpose(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.first().map_or(0, Vec::len);
    let mut cols: Vec<Vec<String>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();
    for row in rows {
        for (col, cell) in cols.iter_mut().zip(row) {
            col.push(cell);
        }
    }
    cols
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}
