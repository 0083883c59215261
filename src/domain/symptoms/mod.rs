//! Symptom vocabulary and free-text matching.

mod matcher;
mod vocabulary;

pub use matcher::{
    normalize_symptom, similarity_ratio, SymptomMatch, SymptomMatcher, DEFAULT_MATCH_CUTOFF,
};
pub use vocabulary::SymptomVocabulary;
