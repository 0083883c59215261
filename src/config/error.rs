//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Match cutoff must be in (0, 1], got {0}")]
    InvalidMatchCutoff(f64),

    #[error("Severity threshold must be a non-negative number, got {0}")]
    InvalidSeverityThreshold(f64),

    #[error("min_samples_split must be at least 2, got {0}")]
    InvalidMinSamplesSplit(usize),

    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,

    #[error("Speech rate must be between 1 and 500 words per minute, got {0}")]
    InvalidSpeechRate(u32),
}
