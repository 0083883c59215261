//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SYMPTOM_SHERPA` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use symptom_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading tables from {}", config.data.dir.display());
//! ```

mod classifier;
mod consultation;
mod data;
mod error;
mod matcher;
mod voice;

pub use classifier::ClassifierConfig;
pub use consultation::ConsultationConfig;
pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use matcher::MatcherConfig;
pub use voice::VoiceConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Locations of the CSV tables
    #[serde(default)]
    pub data: DataConfig,

    /// Fuzzy symptom matching
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Decision tree training
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Traversal mode and reporting
    #[serde(default)]
    pub consultation: ConsultationConfig,

    /// Optional speech output
    #[serde(default)]
    pub voice: VoiceConfig,
}

fn default_log_level() -> String {
    "symptom_sherpa=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data: DataConfig::default(),
            matcher: MatcherConfig::default(),
            classifier: ClassifierConfig::default(),
            consultation: ConsultationConfig::default(),
            voice: VoiceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `SYMPTOM_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SYMPTOM_SHERPA__DATA__DIR=./data` -> `data.dir = ./data`
    /// - `SYMPTOM_SHERPA__VOICE__ENABLED=true` -> `voice.enabled = true`
    /// - `SYMPTOM_SHERPA__CONSULTATION__MODE=ask_each_node`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SYMPTOM_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.data.validate()?;
        self.matcher.validate()?;
        self.classifier.validate()?;
        self.consultation.validate()?;
        self.voice.validate()?;
        Ok(())
    }
}
