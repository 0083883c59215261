//! LoadKnowledgeBaseHandler - Loads the tables and fits the classifier.

use std::rc::Rc;

use thiserror::Error;

use crate::domain::classifier::{DecisionTree, TrainingTable, TreeError};
use crate::domain::foundation::ValidationError;
use crate::domain::reference::ReferenceData;
use crate::domain::symptoms::SymptomVocabulary;
use crate::ports::{ClassifierError, ClassifierProvider, DatasetSource, LoadError};

/// Errors that stop the checker before the first prompt.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("Fitted tree does not match the symptom vocabulary: {0}")]
    Tree(#[from] TreeError),

    #[error("Symptom vocabulary is invalid: {0}")]
    Vocabulary(#[from] ValidationError),
}

/// Everything a consultation reads from. Built once, then only borrowed.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub reference: ReferenceData,
    pub vocabulary: SymptomVocabulary,
    pub tree: DecisionTree,
    /// Share of testing rows the tree labels correctly; `None` when the
    /// testing table is empty.
    pub holdout_accuracy: Option<f64>,
}

/// Handler for assembling the knowledge base at startup.
pub struct LoadKnowledgeBaseHandler {
    dataset: Rc<dyn DatasetSource>,
    classifier: Rc<dyn ClassifierProvider>,
}

impl LoadKnowledgeBaseHandler {
    pub fn new(dataset: Rc<dyn DatasetSource>, classifier: Rc<dyn ClassifierProvider>) -> Self {
        Self {
            dataset,
            classifier,
        }
    }

    pub fn handle(&self) -> Result<KnowledgeBase, StartupError> {
        // 1. Reference tables
        let reference = self.dataset.load_reference()?;
        let (severities, descriptions, precautions) = reference.sizes();
        tracing::info!(severities, descriptions, precautions, "reference tables loaded");

        // 2. Training table and vocabulary
        let training = self.dataset.load_training()?;
        let vocabulary = training.vocabulary()?;
        tracing::info!(
            rows = training.len(),
            symptoms = vocabulary.len(),
            "training table loaded"
        );

        // 3. Fit and check the tree only splits on known symptoms
        let tree = self.classifier.fit(&training)?;
        tree.ensure_features_within(&vocabulary)?;

        // 4. Score against the held-out table
        let testing = self.dataset.load_testing()?;
        let holdout_accuracy = holdout_accuracy(&tree, &testing)?;
        match holdout_accuracy {
            Some(accuracy) => tracing::info!(
                classifier = self.classifier.name(),
                rows = testing.len(),
                accuracy,
                "holdout accuracy"
            ),
            None => tracing::warn!("testing table is empty, skipping holdout accuracy"),
        }

        Ok(KnowledgeBase {
            reference,
            vocabulary,
            tree,
            holdout_accuracy,
        })
    }
}

/// Fraction of `table` rows whose label the tree predicts.
///
/// Columns are matched by name, so the table may order its symptoms
/// differently from the training table. Symptoms the table lacks read as 0.
pub fn holdout_accuracy(tree: &DecisionTree, table: &TrainingTable) -> Result<Option<f64>, TreeError> {
    if table.is_empty() {
        return Ok(None);
    }

    let columns: Vec<Option<usize>> = tree
        .feature_names()
        .iter()
        .map(|name| table.feature_names().iter().position(|c| c == name))
        .collect();

    let mut correct = 0usize;
    let mut sample = vec![0.0; columns.len()];
    for (row, label) in table.samples() {
        for (slot, column) in sample.iter_mut().zip(&columns) {
            *slot = column.map_or(0.0, |idx| row[idx]);
        }
        if tree.predict(&sample)? == label {
            correct += 1;
        }
    }

    Ok(Some(correct as f64 / table.len() as f64))
}
