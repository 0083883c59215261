//! In-memory reference context built once at startup.

use std::collections::HashMap;

use super::Precautions;

/// Severity, description and precaution lookups.
///
/// Constructed by the loader and passed by reference to reporting; there is
/// no process-wide copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    severity: HashMap<String, i32>,
    descriptions: HashMap<String, String>,
    precautions: HashMap<String, Precautions>,
}

impl ReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a symptom severity. Later rows overwrite earlier ones.
    pub fn insert_severity(&mut self, symptom: impl Into<String>, severity: i32) {
        self.severity.insert(symptom.into(), severity);
    }

    pub fn insert_description(&mut self, diagnosis: impl Into<String>, text: impl Into<String>) {
        self.descriptions.insert(diagnosis.into(), text.into());
    }

    pub fn insert_precautions(&mut self, diagnosis: impl Into<String>, precautions: Precautions) {
        self.precautions.insert(diagnosis.into(), precautions);
    }

    /// Builder form of [`insert_severity`](Self::insert_severity).
    pub fn with_severity(mut self, symptom: impl Into<String>, severity: i32) -> Self {
        self.insert_severity(symptom, severity);
        self
    }

    pub fn with_description(mut self, diagnosis: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_description(diagnosis, text);
        self
    }

    pub fn with_precautions(mut self, diagnosis: impl Into<String>, precautions: Precautions) -> Self {
        self.insert_precautions(diagnosis, precautions);
        self
    }

    pub fn severity_of(&self, symptom: &str) -> Option<i32> {
        self.severity.get(symptom).copied()
    }

    pub fn description_of(&self, diagnosis: &str) -> Option<&str> {
        self.descriptions.get(diagnosis).map(String::as_str)
    }

    pub fn precautions_for(&self, diagnosis: &str) -> Option<&Precautions> {
        self.precautions.get(diagnosis)
    }

    /// Number of entries in (severity, description, precaution) tables.
    pub fn sizes(&self) -> (usize, usize, usize) {
        (
            self.severity.len(),
            self.descriptions.len(),
            self.precautions.len(),
        )
    }
}
