//! Adapters - Implementations of the ports.
//!
//! - `dataset` - CSV tables on disk
//! - `classifier` - In-process CART training
//! - `voice` - Speech output
//! - `console` - Terminal and scripted dialogue

pub mod classifier;
pub mod console;
pub mod dataset;
pub mod voice;

pub use classifier::CartClassifier;
pub use console::{ScriptedConsole, StdConsole};
pub use dataset::{CsvDataset, DatasetPaths};
pub use voice::{CommandVoice, RecordingVoice, SilentVoice};
