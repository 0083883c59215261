//! CSV-backed dataset source.
//!
//! Reads the severity, description, precaution, training and testing tables
//! from fixed paths. A missing file is reported as `LoadError::MissingFile`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::tables::{read_descriptions, read_precautions, read_severity, read_training_table};
use crate::domain::classifier::TrainingTable;
use crate::domain::reference::ReferenceData;
use crate::ports::{DatasetSource, LoadError};

/// Locations of the five tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub severity: PathBuf,
    pub description: PathBuf,
    pub precaution: PathBuf,
    pub training: PathBuf,
    pub testing: PathBuf,
}

impl DatasetPaths {
    /// Conventional file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            severity: dir.join("Symptom_severity.csv"),
            description: dir.join("symptom_Description.csv"),
            precaution: dir.join("symptom_precaution.csv"),
            training: dir.join("Training.csv"),
            testing: dir.join("Testing.csv"),
        }
    }
}

/// Dataset source reading CSV files from disk.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    paths: DatasetPaths,
}

impl CsvDataset {
    pub fn new(paths: DatasetPaths) -> Self {
        Self { paths }
    }

    fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "table file not found");
            return Err(LoadError::MissingFile(path.to_path_buf()));
        }
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| LoadError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn load_table(path: &Path) -> Result<TrainingTable, LoadError> {
        let table = read_training_table(Self::open(path)?, path)?;
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            features = table.feature_names().len(),
            "loaded table"
        );
        Ok(table)
    }
}

impl DatasetSource for CsvDataset {
    fn load_reference(&self) -> Result<ReferenceData, LoadError> {
        let mut data = ReferenceData::new();

        let severity = read_severity(Self::open(&self.paths.severity)?, &mut data);
        let description = read_descriptions(Self::open(&self.paths.description)?, &mut data);
        let precaution = read_precautions(Self::open(&self.paths.precaution)?, &mut data);

        tracing::info!(
            severity = severity.loaded,
            descriptions = description.loaded,
            precautions = precaution.loaded,
            skipped = severity.skipped + description.skipped + precaution.skipped,
            "loaded reference tables"
        );
        Ok(data)
    }

    fn load_training(&self) -> Result<TrainingTable, LoadError> {
        Self::load_table(&self.paths.training)
    }

    fn load_testing(&self) -> Result<TrainingTable, LoadError> {
        Self::load_table(&self.paths.testing)
    }
}
