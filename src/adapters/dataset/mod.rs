//! Dataset Adapters
//!
//! CSV implementations of the `DatasetSource` port.
//!
//! - **CsvDataset** - Reads the five tables from a data directory
//! - `tables` - Reader-level parsers shared by the adapter and its tests

mod csv_dataset;
mod tables;

pub use csv_dataset::{CsvDataset, DatasetPaths};
pub use tables::{
    read_descriptions, read_precautions, read_severity, read_training_table, TableStats,
};
