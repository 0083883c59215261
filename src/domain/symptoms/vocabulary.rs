//! The set of symptom identifiers the classifier knows about.

use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// Known symptom identifiers, in training-table column order.
///
/// Immutable once built. Duplicates keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomVocabulary {
    symptoms: Vec<String>,
    index: HashSet<String>,
}

impl SymptomVocabulary {
    /// Builds a vocabulary from symptom names.
    ///
    /// Names are trimmed. Blank names are rejected since they could never be
    /// matched or asked about.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symptoms = Vec::new();
        let mut index = HashSet::new();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(ValidationError::empty_field("symptom"));
            }
            if index.insert(name.to_string()) {
                symptoms.push(name.to_string());
            }
        }

        Ok(Self { symptoms, index })
    }

    /// Returns true if the identifier is a known symptom.
    pub fn contains(&self, symptom: &str) -> bool {
        self.index.contains(symptom)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symptoms.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_column_order_and_drops_duplicates() {
        let vocab =
            SymptomVocabulary::from_names(["itching", "skin_rash", "itching", " chills "]).unwrap();

        assert_eq!(vocab.as_slice(), &["itching", "skin_rash", "chills"]);
        assert_eq!(vocab.len(), 3);
        assert!(vocab.contains("chills"));
        assert!(!vocab.contains(" chills "));
    }

    #[test]
    fn rejects_blank_names() {
        let result = SymptomVocabulary::from_names(["itching", "  "]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn empty_vocabulary_is_allowed() {
        let vocab = SymptomVocabulary::from_names(Vec::<String>::new()).unwrap();
        assert!(vocab.is_empty());
    }
}
