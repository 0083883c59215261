//! Phases of a single consultation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a diagnosis session currently stands.
///
/// `AwaitingSymptomInput` → `AwaitingDuration` → `Traversing` → `Done`.
/// An unmatched symptom leaves the session in `AwaitingSymptomInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationPhase {
    AwaitingSymptomInput,
    AwaitingDuration,
    Traversing,
    Done,
}

impl ConsultationPhase {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AwaitingSymptomInput => "awaiting symptom",
            Self::AwaitingDuration => "awaiting duration",
            Self::Traversing => "traversing",
            Self::Done => "done",
        }
    }
}

impl Default for ConsultationPhase {
    fn default() -> Self {
        Self::AwaitingSymptomInput
    }
}

impl StateMachine for ConsultationPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::AwaitingSymptomInput => vec![Self::AwaitingDuration],
            Self::AwaitingDuration => vec![Self::Traversing],
            Self::Traversing => vec![Self::Done],
            Self::Done => vec![],
        }
    }
}
