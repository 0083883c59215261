//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DatasetSource` - Loads reference and training tables
//! - `ClassifierProvider` - Fits a decision tree from a training table
//! - `VoiceOutput` - Optional text-to-speech
//! - `Console` - Prompting the user and printing output

mod classifier_provider;
mod console;
mod dataset_source;
mod voice_output;

pub use classifier_provider::{ClassifierError, ClassifierProvider};
pub use console::{Console, ConsoleError};
pub use dataset_source::{DatasetSource, LoadError};
pub use voice_output::{speak_best_effort, VoiceError, VoiceOutput};
