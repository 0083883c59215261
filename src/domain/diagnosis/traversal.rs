//! Walking the decision tree from the root to a diagnosis.
//!
//! The walk is a pure function of the tree and a presence oracle. At each
//! split the oracle says whether the node's symptom is present (1.0) or not
//! (0.0); `value <= threshold` goes left, otherwise the symptom is recorded
//! and the walk goes right.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::domain::classifier::{DecisionTree, TreeNode};

/// How the presence of each node's symptom is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    /// Every node is tested against the single symptom the user confirmed.
    #[default]
    ConfirmedSymptom,
    /// The user is asked about each node's symptom as the walk reaches it.
    AskEachNode,
}

/// One decision taken during the walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalStep {
    pub node: usize,
    pub symptom: String,
    pub present: bool,
}

/// Where the walk ended and what it collected on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalOutcome {
    pub diagnosis: String,
    pub leaf: usize,
    /// Symptoms taken down the right branch, in walk order.
    pub symptoms_present: Vec<String>,
    pub steps: Vec<TraversalStep>,
}

/// Walks `tree` asking `is_present` about each split's symptom.
///
/// Terminates because tree construction guarantees children have larger
/// indices than their parent.
pub fn traverse<F, E>(tree: &DecisionTree, mut is_present: F) -> Result<TraversalOutcome, E>
where
    F: FnMut(&str) -> Result<bool, E>,
{
    let mut idx = DecisionTree::ROOT;
    let mut symptoms_present = Vec::new();
    let mut steps = Vec::new();

    loop {
        match &tree.nodes()[idx] {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                let symptom = &tree.feature_names()[*feature];
                let present = is_present(symptom)?;
                let value = if present { 1.0 } else { 0.0 };

                tracing::trace!(node = idx, %symptom, present, "tree step");
                steps.push(TraversalStep {
                    node: idx,
                    symptom: symptom.clone(),
                    present,
                });

                if value <= *threshold {
                    idx = *left;
                } else {
                    symptoms_present.push(symptom.clone());
                    idx = *right;
                }
            }
            TreeNode::Leaf { .. } => {
                let diagnosis = tree
                    .leaf_label(idx)
                    .map(str::to_string)
                    .unwrap_or_default();
                return Ok(TraversalOutcome {
                    diagnosis,
                    leaf: idx,
                    symptoms_present,
                    steps,
                });
            }
        }
    }
}

/// Walks `tree` testing every split against one confirmed symptom.
pub fn traverse_with_symptom(tree: &DecisionTree, confirmed: &str) -> TraversalOutcome {
    match traverse(tree, |symptom| Ok::<_, Infallible>(symptom == confirmed)) {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::fixtures::skin_tree;
    use proptest::prelude::*;

    #[test]
    fn confirmed_symptom_goes_right_at_its_node() {
        let outcome = traverse_with_symptom(&skin_tree(), "itching");

        assert_eq!(outcome.diagnosis, "Drug Reaction");
        assert_eq!(outcome.leaf, 5);
        assert_eq!(outcome.symptoms_present, vec!["itching"]);
        assert_eq!(outcome.steps.len(), 2);
        assert_eq!(outcome.steps[1].symptom, "skin_rash");
        assert!(!outcome.steps[1].present);
    }

    #[test]
    fn unrelated_symptom_goes_left_everywhere() {
        let outcome = traverse_with_symptom(&skin_tree(), "headache");

        assert_eq!(outcome.diagnosis, "Allergy");
        assert!(outcome.symptoms_present.is_empty());
        assert!(outcome.steps.iter().all(|s| !s.present));
    }

    #[test]
    fn symptom_deeper_in_tree_is_recorded() {
        let outcome = traverse_with_symptom(&skin_tree(), "chills");
        assert_eq!(outcome.diagnosis, "Malaria");
        assert_eq!(outcome.symptoms_present, vec!["chills"]);
    }

    #[test]
    fn oracle_can_confirm_several_symptoms() {
        let outcome = traverse(&skin_tree(), |s| {
            Ok::<_, ()>(s == "itching" || s == "skin_rash")
        })
        .unwrap();

        assert_eq!(outcome.diagnosis, "Fungal infection");
        assert_eq!(outcome.symptoms_present, vec!["itching", "skin_rash"]);
    }

    #[test]
    fn oracle_errors_abort_the_walk() {
        let result = traverse(&skin_tree(), |_| Err::<bool, _>("closed"));
        assert_eq!(result, Err("closed"));
    }

    #[test]
    fn leaf_only_tree_asks_nothing() {
        let tree = DecisionTree::new(
            vec![TreeNode::Leaf {
                distribution: vec![3.0],
            }],
            vec![],
            vec!["Allergy".into()],
        )
        .unwrap();

        let outcome = traverse_with_symptom(&tree, "itching");
        assert_eq!(outcome.diagnosis, "Allergy");
        assert!(outcome.steps.is_empty());
    }

    #[test]
    fn default_mode_is_confirmed_symptom() {
        assert_eq!(TraversalMode::default(), TraversalMode::ConfirmedSymptom);
        let mode: TraversalMode = serde_json::from_str("\"ask_each_node\"").unwrap();
        assert_eq!(mode, TraversalMode::AskEachNode);
    }

    proptest! {
        #[test]
        fn traversal_is_deterministic(symptom in "[a-z_]{1,16}") {
            let tree = skin_tree();
            let first = traverse_with_symptom(&tree, &symptom);
            let second = traverse_with_symptom(&tree, &symptom);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn recorded_symptoms_are_tree_features(symptom in prop::sample::select(vec![
            "itching", "skin_rash", "chills", "fatigue",
        ])) {
            let tree = skin_tree();
            let outcome = traverse_with_symptom(&tree, symptom);
            prop_assert!(outcome.symptoms_present.len() <= 1);
            for s in &outcome.symptoms_present {
                prop_assert_eq!(s.as_str(), symptom);
                prop_assert!(tree.feature_names().contains(s));
            }
            prop_assert!(tree.node(outcome.leaf).map_or(false, TreeNode::is_leaf));
        }
    }
}
