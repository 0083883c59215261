//! Classifier training configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Decision tree growth limits
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Maximum tree depth; unset grows until leaves are pure
    pub max_depth: Option<usize>,

    /// Nodes with fewer samples are not split
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
}

fn default_min_samples_split() -> usize {
    2
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_samples_split < 2 {
            return Err(ValidationError::InvalidMinSamplesSplit(self.min_samples_split));
        }
        if self.max_depth == Some(0) {
            return Err(ValidationError::InvalidMaxDepth);
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: default_min_samples_split(),
        }
    }
}
