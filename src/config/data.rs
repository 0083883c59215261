//! Dataset location configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the CSV tables live
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding all tables
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_severity_file")]
    pub severity_file: String,

    #[serde(default = "default_description_file")]
    pub description_file: String,

    #[serde(default = "default_precaution_file")]
    pub precaution_file: String,

    #[serde(default = "default_training_file")]
    pub training_file: String,

    #[serde(default = "default_testing_file")]
    pub testing_file: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_severity_file() -> String {
    "Symptom_severity.csv".to_string()
}

fn default_description_file() -> String {
    "symptom_Description.csv".to_string()
}

fn default_precaution_file() -> String {
    "symptom_precaution.csv".to_string()
}

fn default_training_file() -> String {
    "Training.csv".to_string()
}

fn default_testing_file() -> String {
    "Testing.csv".to_string()
}

impl DataConfig {
    pub fn severity_path(&self) -> PathBuf {
        self.dir.join(&self.severity_file)
    }

    pub fn description_path(&self) -> PathBuf {
        self.dir.join(&self.description_file)
    }

    pub fn precaution_path(&self) -> PathBuf {
        self.dir.join(&self.precaution_file)
    }

    pub fn training_path(&self) -> PathBuf {
        self.dir.join(&self.training_file)
    }

    pub fn testing_path(&self) -> PathBuf {
        self.dir.join(&self.testing_file)
    }

    /// Validate that no file name is blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        let files = [
            (&self.severity_file, "data.severity_file"),
            (&self.description_file, "data.description_file"),
            (&self.precaution_file, "data.precaution_file"),
            (&self.training_file, "data.training_file"),
            (&self.testing_file, "data.testing_file"),
        ];
        for (name, key) in files {
            if name.trim().is_empty() {
                return Err(ValidationError::MissingRequired(key));
            }
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            severity_file: default_severity_file(),
            description_file: default_description_file(),
            precaution_file: default_precaution_file(),
            training_file: default_training_file(),
            testing_file: default_testing_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_join_directory() {
        let config = DataConfig {
            dir: PathBuf::from("/srv/data"),
            ..DataConfig::default()
        };
        assert_eq!(config.training_path(), PathBuf::from("/srv/data/Training.csv"));
        assert_eq!(
            config.precaution_path(),
            PathBuf::from("/srv/data/symptom_precaution.csv")
        );
    }

    #[test]
    fn blank_file_name_is_invalid() {
        let config = DataConfig {
            testing_file: " ".to_string(),
            ..DataConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("data.testing_file"))
        );
    }
}
