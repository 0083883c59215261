//! Final consultation summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SymptomDuration, TraversalOutcome};
use crate::domain::reference::{Precautions, ReferenceData};

/// Severity score above which the report recommends seeing a doctor.
pub const DEFAULT_SEVERITY_THRESHOLD: f64 = 13.0;

/// Advice derived from symptom severity and duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityAdvice {
    ConsultDoctor,
    TakePrecautions,
}

impl SeverityAdvice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ConsultDoctor => "You should consult a doctor.",
            Self::TakePrecautions => "It might not be that bad, but you should take precautions.",
        }
    }
}

/// Everything printed at the end of a consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub diagnosis: String,
    /// Symptoms recorded present along the tree path.
    pub symptoms_recorded: Vec<String>,
    pub days: SymptomDuration,
    pub description: Option<String>,
    pub precautions: Option<Precautions>,
    pub severity_score: f64,
    pub advice: SeverityAdvice,
}

impl DiagnosisReport {
    /// Resolves reference entries for the outcome's diagnosis.
    ///
    /// The severity score is `sum(severity) * days / (n + 1)` over the
    /// recorded symptoms plus the confirmed one. Unknown severities count
    /// as zero.
    pub fn compile(
        outcome: &TraversalOutcome,
        confirmed_symptom: Option<&str>,
        days: SymptomDuration,
        reference: &ReferenceData,
        severity_threshold: f64,
    ) -> Self {
        let mut scored: Vec<&str> = outcome.symptoms_present.iter().map(String::as_str).collect();
        if let Some(confirmed) = confirmed_symptom {
            if !scored.contains(&confirmed) {
                scored.push(confirmed);
            }
        }

        let total: i64 = scored
            .iter()
            .map(|s| i64::from(reference.severity_of(s).unwrap_or(0)))
            .sum();
        let severity_score = total as f64 * f64::from(days.days()) / (scored.len() as f64 + 1.0);
        let advice = if severity_score > severity_threshold {
            SeverityAdvice::ConsultDoctor
        } else {
            SeverityAdvice::TakePrecautions
        };

        Self {
            diagnosis: outcome.diagnosis.clone(),
            symptoms_recorded: outcome.symptoms_present.clone(),
            days,
            description: reference.description_of(&outcome.diagnosis).map(str::to_string),
            precautions: reference.precautions_for(&outcome.diagnosis).cloned(),
            severity_score,
            advice,
        }
    }

    /// One sentence suitable for speech output.
    pub fn spoken_summary(&self) -> String {
        format!("You may have {}. {}", self.diagnosis, self.advice.message())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DiagnosisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Predicted disease: {}", self.diagnosis)?;
        match &self.description {
            Some(text) => writeln!(f, "Description: {}", text)?,
            None => writeln!(f, "Description not available for {}.", self.diagnosis)?,
        }

        writeln!(f)?;
        writeln!(f, "--- Diagnosis Summary ---")?;
        if self.symptoms_recorded.is_empty() {
            writeln!(f, "Symptoms provided: none")?;
        } else {
            writeln!(f, "Symptoms provided: {}", self.symptoms_recorded.join(", "))?;
        }
        writeln!(f, "Days with symptoms: {}", self.days)?;
        writeln!(f, "Final Diagnosis: {}", self.diagnosis)?;
        match &self.precautions {
            Some(precautions) => {
                writeln!(f, "Suggested Precautions:")?;
                for precaution in precautions.iter() {
                    writeln!(f, "- {}", precaution)?;
                }
            }
            None => writeln!(f, "Precautions not available for the predicted disease.")?,
        }
        write!(f, "Advice: {}", self.advice.message())
    }
}
