//! Consultation behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::diagnosis::{TraversalMode, DEFAULT_SEVERITY_THRESHOLD};

/// How the session walks the tree and reports
#[derive(Debug, Clone, Deserialize)]
pub struct ConsultationConfig {
    /// `confirmed_symptom` (one symptom per session) or `ask_each_node`
    #[serde(default)]
    pub mode: TraversalMode,

    /// Severity score above which the report advises seeing a doctor
    #[serde(default = "default_severity_threshold")]
    pub severity_threshold: f64,
}

fn default_severity_threshold() -> f64 {
    DEFAULT_SEVERITY_THRESHOLD
}

impl ConsultationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.severity_threshold.is_finite() || self.severity_threshold < 0.0 {
            return Err(ValidationError::InvalidSeverityThreshold(
                self.severity_threshold,
            ));
        }
        Ok(())
    }
}

impl Default for ConsultationConfig {
    fn default() -> Self {
        Self {
            mode: TraversalMode::default(),
            severity_threshold: default_severity_threshold(),
        }
    }
}
