//! Symptom matcher configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::symptoms::DEFAULT_MATCH_CUTOFF;

/// Fuzzy matching settings
#[derive(Debug, Clone, Deserialize)]
pub struct MatcherConfig {
    /// Minimum similarity for a typo to resolve to a known symptom
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
}

fn default_cutoff() -> f64 {
    DEFAULT_MATCH_CUTOFF
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.cutoff > 0.0 && self.cutoff <= 1.0) {
            return Err(ValidationError::InvalidMatchCutoff(self.cutoff));
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
        }
    }
}
