//! Classifier Provider Port - Interface for fitting the decision tree.
//!
//! The consultation only needs a fitted `DecisionTree`; how it was trained
//! is up to the adapter.

use crate::domain::classifier::{DecisionTree, TrainingTable, TreeError};

/// Errors that can occur while fitting a classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("Training table is empty")]
    EmptyTrainingSet,

    #[error("Classifier training failed: {0}")]
    Training(String),

    #[error("Fitted tree is invalid: {0}")]
    InvalidTree(#[from] TreeError),
}

/// Port for turning a labelled table into a decision tree.
pub trait ClassifierProvider {
    /// Fit a tree whose features are the table's feature columns.
    ///
    /// # Errors
    /// Returns `ClassifierError::EmptyTrainingSet` if the table has no rows.
    fn fit(&self, table: &TrainingTable) -> Result<DecisionTree, ClassifierError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_errors_convert() {
        let err: ClassifierError = TreeError::Empty.into();
        assert_eq!(err.to_string(), "Fitted tree is invalid: Tree has no nodes");
    }
}
