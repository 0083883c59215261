//! Labelled symptom-presence table used to fit and score the classifier.

use std::collections::BTreeSet;

use crate::domain::foundation::ValidationError;
use crate::domain::symptoms::SymptomVocabulary;

/// Name of the column holding the diagnosis label.
pub const LABEL_COLUMN: &str = "prognosis";

/// Rows of feature values with one diagnosis label each.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingTable {
    feature_names: Vec<String>,
    rows: Vec<Vec<f64>>,
    labels: Vec<String>,
}

impl TrainingTable {
    /// Builds a table, checking that every row has one value per feature and
    /// one label.
    pub fn new(
        feature_names: Vec<String>,
        rows: Vec<Vec<f64>>,
        labels: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if rows.len() != labels.len() {
            return Err(ValidationError::invalid_format(
                "labels",
                format!("{} rows but {} labels", rows.len(), labels.len()),
            ));
        }
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != feature_names.len())
        {
            return Err(ValidationError::invalid_format(
                "rows",
                format!(
                    "row {} has {} values, expected {}",
                    idx,
                    row.len(),
                    feature_names.len()
                ),
            ));
        }
        if let Some(idx) = labels.iter().position(|l| l.trim().is_empty()) {
            return Err(ValidationError::empty_field(format!("{}[{}]", LABEL_COLUMN, idx)));
        }

        Ok(Self {
            feature_names,
            rows,
            labels,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct labels in lexical order.
    pub fn classes(&self) -> Vec<String> {
        self.labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The symptom vocabulary: every feature column name.
    pub fn vocabulary(&self) -> Result<SymptomVocabulary, ValidationError> {
        SymptomVocabulary::from_names(&self.feature_names)
    }

    /// Iterates `(row, label)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (&[f64], &str)> {
        self.rows
            .iter()
            .map(Vec::as_slice)
            .zip(self.labels.iter().map(String::as_str))
    }
}
