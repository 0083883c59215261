//! Decision-tree model and the labelled table it is fitted from.

mod decision_tree;
mod training_table;

pub use decision_tree::{DecisionTree, TreeError, TreeNode};
pub use training_table::{TrainingTable, LABEL_COLUMN};

#[cfg(test)]
pub(crate) use decision_tree::fixtures;
