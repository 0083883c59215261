//! Row-level parsing of the CSV tables.
//!
//! Reference tables are read without headers and skip any row that is too
//! short or unparseable. Training tables need a header row containing the
//! label column.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

use crate::domain::classifier::{TrainingTable, LABEL_COLUMN};
use crate::domain::reference::{Precautions, ReferenceData};
use crate::ports::LoadError;

/// How many rows of a reference table were kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    pub loaded: usize,
    pub skipped: usize,
}

fn reference_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

/// Feeds every well-formed record to `accept`, counting the rest as skipped.
fn for_each_row<R, F>(reader: R, table: &str, mut accept: F) -> TableStats
where
    R: Read,
    F: FnMut(&StringRecord) -> bool,
{
    let mut stats = TableStats::default();
    for (line, record) in reference_reader(reader).records().enumerate() {
        let kept = match record {
            Ok(record) => accept(&record),
            Err(e) => {
                tracing::debug!(table, line = line + 1, error = %e, "unreadable row");
                false
            }
        };
        if kept {
            stats.loaded += 1;
        } else {
            tracing::debug!(table, line = line + 1, "skipping malformed row");
            stats.skipped += 1;
        }
    }
    stats
}

/// `symptom,severity` rows. Needs two fields and an integer severity.
pub fn read_severity<R: Read>(reader: R, data: &mut ReferenceData) -> TableStats {
    for_each_row(reader, "severity", |record| {
        match (record.get(0), record.get(1).map(str::parse::<i32>)) {
            (Some(symptom), Some(Ok(severity))) if !symptom.is_empty() => {
                data.insert_severity(symptom, severity);
                true
            }
            _ => false,
        }
    })
}

/// `diagnosis,description` rows. Needs two fields.
pub fn read_descriptions<R: Read>(reader: R, data: &mut ReferenceData) -> TableStats {
    for_each_row(reader, "description", |record| {
        match (record.get(0), record.get(1)) {
            (Some(diagnosis), Some(text)) if !diagnosis.is_empty() => {
                data.insert_description(diagnosis, text);
                true
            }
            _ => false,
        }
    })
}

/// `diagnosis,p1,p2,p3,p4` rows. Needs five fields.
pub fn read_precautions<R: Read>(reader: R, data: &mut ReferenceData) -> TableStats {
    for_each_row(reader, "precaution", |record| {
        let fields: Vec<&str> = record.iter().collect();
        match fields.split_first() {
            Some((diagnosis, rest)) if !diagnosis.is_empty() => {
                match Precautions::from_slice(rest) {
                    Some(precautions) => {
                        data.insert_precautions(*diagnosis, precautions);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    })
}

/// Reads a headed table of symptom columns plus a `prognosis` label column.
///
/// Blank-header columns are ignored and blank cells read as 0.
pub fn read_training_table<R: Read>(reader: R, path: &Path) -> Result<TrainingTable, LoadError> {
    let mut table_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = table_reader
        .headers()
        .map_err(|e| LoadError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();

    let label_idx = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .ok_or_else(|| LoadError::MissingLabelColumn {
            path: path.to_path_buf(),
            column: LABEL_COLUMN,
        })?;

    let feature_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, name)| *idx != label_idx && !name.is_empty())
        .map(|(idx, name)| (idx, name.to_string()))
        .collect();

    let mut rows = Vec::new();
    let mut labels = Vec::new();

    for (row_idx, record) in table_reader.records().enumerate() {
        let row_number = row_idx + 1;
        let record = record.map_err(|e| LoadError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut values = Vec::with_capacity(feature_columns.len());
        for (col, name) in &feature_columns {
            let cell = record.get(*col).unwrap_or("");
            let value = if cell.is_empty() {
                0.0
            } else {
                cell.parse::<f64>().map_err(|_| LoadError::InvalidCell {
                    path: path.to_path_buf(),
                    row: row_number,
                    column: name.clone(),
                    value: cell.to_string(),
                })?
            };
            values.push(value);
        }

        rows.push(values);
        labels.push(record.get(label_idx).unwrap_or("").to_string());
    }

    let feature_names = feature_columns.into_iter().map(|(_, name)| name).collect();
    TrainingTable::new(feature_names, rows, labels).map_err(|e| LoadError::InvalidTable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
