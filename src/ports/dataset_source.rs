//! Dataset Source Port - Interface for loading the reference and training
//! tables the checker needs at startup.

use crate::domain::classifier::TrainingTable;
use crate::domain::reference::ReferenceData;
use std::path::PathBuf;

/// Errors that can occur while loading tables.
///
/// All of these are fatal at startup. Individual malformed reference rows
/// are skipped by adapters and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File '{}' not found", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read '{}': {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("Table '{}' has no '{column}' column", .path.display())]
    MissingLabelColumn { path: PathBuf, column: &'static str },

    #[error("Table '{}' row {row}, column '{column}': cannot parse '{value}' as a number", .path.display())]
    InvalidCell {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },

    #[error("Table '{}' is invalid: {message}", .path.display())]
    InvalidTable { path: PathBuf, message: String },
}

/// Port for loading everything the consultation depends on.
pub trait DatasetSource {
    /// Load severity, description and precaution tables.
    ///
    /// # Errors
    /// Returns `LoadError::MissingFile` if any of the three files is absent.
    fn load_reference(&self) -> Result<ReferenceData, LoadError>;

    /// Load the table the classifier is fitted from.
    fn load_training(&self) -> Result<TrainingTable, LoadError>;

    /// Load the held-out table used to score the fitted classifier.
    fn load_testing(&self) -> Result<TrainingTable, LoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_the_path() {
        let err = LoadError::MissingFile(PathBuf::from("data/Training.csv"));
        assert_eq!(err.to_string(), "File 'data/Training.csv' not found");
    }

    #[test]
    fn invalid_cell_names_row_and_column() {
        let err = LoadError::InvalidCell {
            path: PathBuf::from("Training.csv"),
            row: 3,
            column: "itching".to_string(),
            value: "yes".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("'itching'"));
        assert!(msg.contains("'yes'"));
    }
}
