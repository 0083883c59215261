//! CART decision-tree fitting backed by `linfa-trees`.
//!
//! The fitted model is copied into the domain's flat arena: splits keep
//! linfa's feature index and threshold, and every leaf's distribution is the
//! count of training rows that reach it. Leaf labels therefore follow the
//! sorted class order on ties.

use std::collections::HashMap;

use linfa::prelude::*;
use linfa::Dataset;
use linfa_trees::{DecisionTree as LinfaTree, SplitQuality, TreeNode as LinfaNode};
use ndarray::{Array1, Array2};

use crate::domain::classifier::{DecisionTree, TrainingTable, TreeNode};
use crate::ports::{ClassifierError, ClassifierProvider};

/// Gini-impurity CART trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartClassifier {
    max_depth: Option<usize>,
    min_samples_split: usize,
}

impl Default for CartClassifier {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

impl CartClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop splitting below this depth. `None` grows until leaves are pure.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Nodes with fewer samples become leaves. Values below 2 are raised to 2.
    pub fn with_min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.min_samples_split = min_samples_split.max(2);
        self
    }

    /// Copies linfa's node tree into preorder arena form. Returns the nodes
    /// with zeroed leaf distributions and linfa's prediction per leaf.
    fn flatten(
        root: &LinfaNode<f64, usize>,
        n_classes: usize,
    ) -> Result<(Vec<TreeNode>, Vec<Option<usize>>), ClassifierError> {
        // Children are allocated after their parent, so every child index is
        // larger than its parent's.
        let mut nodes: Vec<Option<TreeNode>> = vec![None];
        let mut predictions: Vec<Option<usize>> = vec![None];
        let mut pending = vec![(root, 0usize)];

        while let Some((node, idx)) = pending.pop() {
            if node.is_leaf() {
                nodes[idx] = Some(TreeNode::Leaf {
                    distribution: vec![0.0; n_classes],
                });
                predictions[idx] = node.prediction();
                continue;
            }

            let (feature, threshold, _) = node.split();
            let children = node.children();
            let left_child = children.first().copied().and_then(Option::as_deref);
            let right_child = children.get(1).copied().and_then(Option::as_deref);
            let (Some(left_child), Some(right_child)) = (left_child, right_child) else {
                return Err(ClassifierError::Training(format!(
                    "split on feature {} is missing a child",
                    feature
                )));
            };

            let left = nodes.len();
            let right = left + 1;
            nodes.extend([None, None]);
            predictions.extend([None, None]);
            nodes[idx] = Some(TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            });
            pending.push((right_child, right));
            pending.push((left_child, left));
        }

        Ok((nodes.into_iter().flatten().collect(), predictions))
    }

    /// Routes every training row to its leaf and counts labels there.
    fn tally_leaves(nodes: &mut [TreeNode], table: &TrainingTable, targets: &[usize]) {
        for (row, &class) in table.rows().iter().zip(targets) {
            let mut idx = DecisionTree::ROOT;
            while let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = &nodes[idx]
            {
                idx = if row[*feature] <= *threshold { *left } else { *right };
            }
            if let TreeNode::Leaf { distribution } = &mut nodes[idx] {
                distribution[class] += 1.0;
            }
        }
    }
}

impl ClassifierProvider for CartClassifier {
    fn fit(&self, table: &TrainingTable) -> Result<DecisionTree, ClassifierError> {
        if table.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        let classes = table.classes();
        let class_index: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        let targets: Vec<usize> = table
            .labels()
            .iter()
            .map(|l| class_index[l.as_str()])
            .collect();

        let records = Array2::from_shape_vec(
            (table.len(), table.feature_names().len()),
            table.rows().iter().flatten().copied().collect(),
        )
        .map_err(|e| ClassifierError::Training(e.to_string()))?;
        let dataset = Dataset::new(records, Array1::from(targets.clone()));

        let model = LinfaTree::params()
            .split_quality(SplitQuality::Gini)
            .max_depth(self.max_depth)
            .min_weight_split(self.min_samples_split as f32)
            .fit(&dataset)
            .map_err(|e| ClassifierError::Training(e.to_string()))?;

        let (mut nodes, predictions) = Self::flatten(model.root_node(), classes.len())?;
        Self::tally_leaves(&mut nodes, table, &targets);
        for (node, prediction) in nodes.iter_mut().zip(predictions) {
            if let (TreeNode::Leaf { distribution }, Some(class)) = (node, prediction) {
                if distribution.iter().all(|&c| c == 0.0) && class < distribution.len() {
                    distribution[class] = 1.0;
                }
            }
        }

        let tree = DecisionTree::new(nodes, table.feature_names().to_vec(), classes)?;
        tracing::info!(
            classifier = self.name(),
            nodes = tree.n_nodes(),
            leaves = tree.n_leaves(),
            depth = tree.depth(),
            "fitted decision tree"
        );
        Ok(tree)
    }

    fn name(&self) -> &'static str {
        "cart"
    }
}
