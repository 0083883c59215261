//! Fuzzy matching of free-text symptom input against the vocabulary.
//!
//! Input is normalized (trimmed, whitespace runs joined with `_`, lowercased)
//! and compared with every vocabulary entry by sequence-matching ratio
//! (`2 * matched / total` characters). The single best entry at or above the
//! cutoff wins.

use serde::{Deserialize, Serialize};
use similar::TextDiff;

use super::SymptomVocabulary;
use crate::domain::foundation::ValidationError;

/// Minimum similarity a candidate needs to be accepted.
pub const DEFAULT_MATCH_CUTOFF: f64 = 0.8;

/// A vocabulary entry resolved from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomMatch {
    pub symptom: String,
    pub similarity: f64,
    pub exact: bool,
}

/// Normalizes raw user text into vocabulary form.
///
/// `"  Skin   Rash "` becomes `"skin_rash"`.
pub fn normalize_symptom(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Resolves free text to at most one known symptom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymptomMatcher {
    cutoff: f64,
}

impl Default for SymptomMatcher {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_MATCH_CUTOFF,
        }
    }
}

impl SymptomMatcher {
    /// Creates a matcher with a custom cutoff in `(0, 1]`.
    pub fn new(cutoff: f64) -> Result<Self, ValidationError> {
        if !(cutoff > 0.0 && cutoff <= 1.0) {
            return Err(ValidationError::invalid_format(
                "match_cutoff",
                format!("must be in (0, 1], got {}", cutoff),
            ));
        }
        Ok(Self { cutoff })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Finds the closest vocabulary entry for `raw`.
    ///
    /// Returns `None` when nothing clears the cutoff; the caller re-prompts.
    /// Ties go to the entry that appears first in the vocabulary.
    pub fn best_match(&self, raw: &str, vocabulary: &SymptomVocabulary) -> Option<SymptomMatch> {
        let needle = normalize_symptom(raw);
        if needle.is_empty() {
            return None;
        }

        if let Some(exact) = vocabulary
            .iter()
            .find(|candidate| candidate.to_lowercase() == needle)
        {
            return Some(SymptomMatch {
                symptom: exact.to_string(),
                similarity: 1.0,
                exact: true,
            });
        }

        let mut best: Option<SymptomMatch> = None;
        for candidate in vocabulary.iter() {
            let similarity = similarity_ratio(&needle, &candidate.to_lowercase());
            if similarity < self.cutoff {
                continue;
            }
            let better = best
                .as_ref()
                .map_or(true, |current| similarity > current.similarity);
            if better {
                best = Some(SymptomMatch {
                    symptom: candidate.to_string(),
                    similarity,
                    exact: false,
                });
            }
        }
        best
    }
}

/// Share of characters the two strings have in common, in `[0, 1]`.
///
/// A swapped pair of letters loses one match rather than two edits, so
/// `chilsl` still scores 0.83 against `chills`.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skin_vocabulary() -> SymptomVocabulary {
        SymptomVocabulary::from_names(["itching", "skin_rash", "nodal_skin_eruptions"]).unwrap()
    }

    mod normalization {
        use super::*;

        #[test]
        fn trims_and_joins_words() {
            assert_eq!(normalize_symptom("  skin rash  "), "skin_rash");
        }

        #[test]
        fn collapses_whitespace_runs() {
            assert_eq!(normalize_symptom("nodal \t skin  eruptions"), "nodal_skin_eruptions");
        }

        #[test]
        fn lowercases() {
            assert_eq!(normalize_symptom("Itching"), "itching");
        }
    }

    mod matching {
        use super::*;

        #[test]
        fn typo_resolves_to_closest_symptom() {
            let m = SymptomMatcher::default()
                .best_match("itchng", &skin_vocabulary())
                .unwrap();
            assert_eq!(m.symptom, "itching");
            assert!(m.similarity >= DEFAULT_MATCH_CUTOFF);
            assert!(!m.exact);
        }

        #[test]
        fn transposed_letters_still_match() {
            let vocab = SymptomVocabulary::from_names([
                "itching",
                "skin_rash",
                "chills",
                "fatigue",
            ])
            .unwrap();
            let matcher = SymptomMatcher::default();

            for (typo, expected) in [
                ("itcihng", "itching"),
                ("chilsl", "chills"),
                ("fatgiue", "fatigue"),
                ("skin_rahs", "skin_rash"),
                ("skin rahs", "skin_rash"),
            ] {
                let m = matcher.best_match(typo, &vocab);
                assert_eq!(
                    m.map(|m| m.symptom),
                    Some(expected.to_string()),
                    "typo {}",
                    typo
                );
            }
        }

        #[test]
        fn garbage_has_no_match() {
            assert!(SymptomMatcher::default()
                .best_match("xyz123", &skin_vocabulary())
                .is_none());
        }

        #[test]
        fn spaced_input_matches_exactly() {
            let m = SymptomMatcher::default()
                .best_match(" Skin Rash ", &skin_vocabulary())
                .unwrap();
            assert_eq!(m.symptom, "skin_rash");
            assert!(m.exact);
            assert_eq!(m.similarity, 1.0);
        }

        #[test]
        fn blank_input_has_no_match() {
            assert!(SymptomMatcher::default()
                .best_match("   ", &skin_vocabulary())
                .is_none());
        }

        #[test]
        fn stricter_cutoff_rejects_typos() {
            let matcher = SymptomMatcher::new(0.95).unwrap();
            assert!(matcher.best_match("itchng", &skin_vocabulary()).is_none());
        }

        #[test]
        fn ties_prefer_vocabulary_order() {
            let vocab = SymptomVocabulary::from_names(["abcd", "abce"]).unwrap();
            let matcher = SymptomMatcher::new(0.7).unwrap();
            let m = matcher.best_match("abcx", &vocab).unwrap();
            assert_eq!(m.symptom, "abcd");
        }
    }

    mod ratio {
        use super::*;

        #[test]
        fn counts_shared_characters() {
            assert_eq!(similarity_ratio("itching", "itching"), 1.0);
            assert!((similarity_ratio("chilsl", "chills") - 10.0 / 12.0).abs() < 1e-6);
            assert!((similarity_ratio("itcihng", "itching") - 12.0 / 14.0).abs() < 1e-6);
            assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        }
    }

    mod cutoff {
        use super::*;

        #[test]
        fn default_cutoff_is_point_eight() {
            assert_eq!(SymptomMatcher::default().cutoff(), 0.8);
        }

        #[test]
        fn rejects_out_of_range_cutoff() {
            assert!(SymptomMatcher::new(0.0).is_err());
            assert!(SymptomMatcher::new(1.5).is_err());
            assert!(SymptomMatcher::new(f64::NAN).is_err());
            assert!(SymptomMatcher::new(1.0).is_ok());
        }
    }

    proptest! {
        #[test]
        fn every_vocabulary_entry_matches_itself(idx in 0usize..3) {
            let vocab = skin_vocabulary();
            let symptom = vocab.as_slice()[idx].clone();
            let m = SymptomMatcher::default().best_match(&symptom, &vocab).unwrap();
            prop_assert_eq!(m.symptom, symptom);
            prop_assert!(m.exact);
        }

        #[test]
        fn matches_always_clear_the_cutoff(input in "[a-z_ ]{0,24}") {
            if let Some(m) = SymptomMatcher::default().best_match(&input, &skin_vocabulary()) {
                prop_assert!(m.similarity >= DEFAULT_MATCH_CUTOFF);
                prop_assert!(skin_vocabulary().contains(&m.symptom));
            }
        }
    }
}
