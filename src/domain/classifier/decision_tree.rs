//! Fitted decision tree stored as a flat node arena.
//!
//! Node 0 is the root. Every split points at children with a larger index,
//! so any walk from the root is strictly increasing and must end at a leaf.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::symptoms::SymptomVocabulary;

/// Errors raised while building or querying a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("Tree has no nodes")]
    Empty,

    #[error("Tree has no classes")]
    NoClasses,

    #[error("Node {node} references feature {feature}, but only {available} features exist")]
    FeatureOutOfRange {
        node: usize,
        feature: usize,
        available: usize,
    },

    #[error("Node {node} references missing child {child}")]
    ChildOutOfRange { node: usize, child: usize },

    #[error("Node {node} points back to node {child}")]
    BackwardChild { node: usize, child: usize },

    #[error("Node {node} has a non-finite threshold")]
    NonFiniteThreshold { node: usize },

    #[error("Leaf {node} has {actual} class counts, expected {expected}")]
    DistributionMismatch {
        node: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Tree feature '{0}' is not a known symptom")]
    UnknownFeature(String),

    #[error("Sample has {actual} values, expected {expected}")]
    SampleWidth { expected: usize, actual: usize },
}

/// One node of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal node: `value(feature) <= threshold` goes left, else right.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node holding per-class counts aligned with `classes`.
    Leaf { distribution: Vec<f64> },
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }
}

/// A read-only classifier over symptom-presence vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    feature_names: Vec<String>,
    classes: Vec<String>,
}

impl DecisionTree {
    /// Index of the root node.
    pub const ROOT: usize = 0;

    /// Validates and assembles a tree.
    ///
    /// # Errors
    ///
    /// Returns `TreeError` if the arena is empty, a split references a
    /// missing feature or child, a child index does not exceed its parent,
    /// a threshold is not finite, or a leaf distribution is mis-sized.
    pub fn new(
        nodes: Vec<TreeNode>,
        feature_names: Vec<String>,
        classes: Vec<String>,
    ) -> Result<Self, TreeError> {
        if nodes.is_empty() {
            return Err(TreeError::Empty);
        }
        if classes.is_empty() {
            return Err(TreeError::NoClasses);
        }

        for (idx, node) in nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= feature_names.len() {
                        return Err(TreeError::FeatureOutOfRange {
                            node: idx,
                            feature: *feature,
                            available: feature_names.len(),
                        });
                    }
                    if !threshold.is_finite() {
                        return Err(TreeError::NonFiniteThreshold { node: idx });
                    }
                    for child in [*left, *right] {
                        if child >= nodes.len() {
                            return Err(TreeError::ChildOutOfRange { node: idx, child });
                        }
                        if child <= idx {
                            return Err(TreeError::BackwardChild { node: idx, child });
                        }
                    }
                }
                TreeNode::Leaf { distribution } => {
                    if distribution.len() != classes.len() {
                        return Err(TreeError::DistributionMismatch {
                            node: idx,
                            expected: classes.len(),
                            actual: distribution.len(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            nodes,
            feature_names,
            classes,
        })
    }

    /// Checks that every feature the tree splits on is a known symptom.
    pub fn ensure_features_within(&self, vocabulary: &SymptomVocabulary) -> Result<(), TreeError> {
        for node in &self.nodes {
            if let TreeNode::Split { feature, .. } = node {
                let name = &self.feature_names[*feature];
                if !vocabulary.contains(name) {
                    return Err(TreeError::UnknownFeature(name.clone()));
                }
            }
        }
        Ok(())
    }

    pub fn node(&self, idx: usize) -> Option<&TreeNode> {
        self.nodes.get(idx)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut max_depth = 0;
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split { left, right, .. } = node {
                let child_depth = depths[idx] + 1;
                depths[*left] = depths[*left].max(child_depth);
                depths[*right] = depths[*right].max(child_depth);
                max_depth = max_depth.max(child_depth);
            }
        }
        max_depth
    }

    /// Label with the highest count at a leaf. The first maximum wins.
    ///
    /// Returns `None` if `idx` is not a leaf.
    pub fn leaf_label(&self, idx: usize) -> Option<&str> {
        match self.nodes.get(idx)? {
            TreeNode::Leaf { distribution } => {
                let best = distribution
                    .iter()
                    .enumerate()
                    .fold(0, |best, (i, count)| {
                        if *count > distribution[best] {
                            i
                        } else {
                            best
                        }
                    });
                self.classes.get(best).map(String::as_str)
            }
            TreeNode::Split { .. } => None,
        }
    }

    /// Walks a full feature vector down to a leaf and returns its label.
    pub fn predict(&self, sample: &[f64]) -> Result<&str, TreeError> {
        if sample.len() != self.feature_names.len() {
            return Err(TreeError::SampleWidth {
                expected: self.feature_names.len(),
                actual: sample.len(),
            });
        }

        let mut idx = Self::ROOT;
        loop {
            match &self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if sample[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { .. } => {
                    return self.leaf_label(idx).ok_or(TreeError::NoClasses);
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Two-level tree over `[itching, skin_rash, chills]`.
    ///
    /// ```text
    /// 0: itching <= 0.5
    ///    1: chills <= 0.5
    ///       3: leaf [1, 0, 0, 0] Allergy
    ///       4: leaf [0, 0, 0, 5] Malaria
    ///    2: skin_rash <= 0.5
    ///       5: leaf [0, 4, 0, 0] Drug Reaction
    ///       6: leaf [0, 0, 3, 0] Fungal infection
    /// ```
    pub(crate) fn skin_tree() -> DecisionTree {
        DecisionTree::new(
            vec![
                TreeNode::Split { feature: 0, threshold: 0.5, left: 1, right: 2 },
                TreeNode::Split { feature: 2, threshold: 0.5, left: 3, right: 4 },
                TreeNode::Split { feature: 1, threshold: 0.5, left: 5, right: 6 },
                TreeNode::Leaf { distribution: vec![1.0, 0.0, 0.0, 0.0] },
                TreeNode::Leaf { distribution: vec![0.0, 0.0, 0.0, 5.0] },
                TreeNode::Leaf { distribution: vec![0.0, 4.0, 0.0, 0.0] },
                TreeNode::Leaf { distribution: vec![0.0, 0.0, 3.0, 0.0] },
            ],
            vec!["itching".into(), "skin_rash".into(), "chills".into()],
            vec![
                "Allergy".into(),
                "Drug Reaction".into(),
                "Fungal infection".into(),
                "Malaria".into(),
            ],
        )
        .unwrap()
    }
}
