//! One consultation from first symptom to diagnosis.

use thiserror::Error;

use super::{ConsultationPhase, ParsedDuration, SymptomDuration, TraversalOutcome};
use crate::domain::classifier::DecisionTree;
use crate::domain::foundation::{SessionId, StateMachine, Timestamp, ValidationError};
use crate::domain::symptoms::{SymptomMatch, SymptomMatcher, SymptomVocabulary};

use super::traversal::traverse;

/// Errors raised when the session is driven out of order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Cannot {action} while {}", .phase.label())]
    WrongPhase {
        action: &'static str,
        phase: ConsultationPhase,
    },

    #[error("Invalid phase transition: {0}")]
    Transition(#[from] ValidationError),
}

/// Session state: the confirmed symptom, days symptomatic and the outcome.
///
/// The day count is collected for reporting only; it never affects routing.
#[derive(Debug, Clone)]
pub struct DiagnosisSession {
    id: SessionId,
    started_at: Timestamp,
    phase: ConsultationPhase,
    confirmed_symptom: Option<String>,
    duration: Option<SymptomDuration>,
    outcome: Option<TraversalOutcome>,
}

impl Default for DiagnosisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosisSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            phase: ConsultationPhase::default(),
            confirmed_symptom: None,
            duration: None,
            outcome: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn phase(&self) -> ConsultationPhase {
        self.phase
    }

    pub fn confirmed_symptom(&self) -> Option<&str> {
        self.confirmed_symptom.as_deref()
    }

    pub fn duration(&self) -> Option<SymptomDuration> {
        self.duration
    }

    pub fn outcome(&self) -> Option<&TraversalOutcome> {
        self.outcome.as_ref()
    }

    /// Offers raw symptom text.
    ///
    /// On a match the session moves on to ask for the duration. On no match
    /// it stays put and returns `Ok(None)` so the caller can re-prompt.
    pub fn submit_symptom(
        &mut self,
        raw: &str,
        matcher: &SymptomMatcher,
        vocabulary: &SymptomVocabulary,
    ) -> Result<Option<SymptomMatch>, SessionError> {
        self.require(ConsultationPhase::AwaitingSymptomInput, "submit a symptom")?;

        let Some(found) = matcher.best_match(raw, vocabulary) else {
            tracing::debug!(session = %self.id, input = raw, "symptom not recognized");
            return Ok(None);
        };

        self.advance(ConsultationPhase::AwaitingDuration)?;
        self.confirmed_symptom = Some(found.symptom.clone());
        tracing::debug!(
            session = %self.id,
            symptom = %found.symptom,
            similarity = found.similarity,
            "symptom confirmed"
        );
        Ok(Some(found))
    }

    /// Offers the days-symptomatic answer. Unusable answers become one day.
    pub fn submit_duration(&mut self, raw: &str) -> Result<ParsedDuration, SessionError> {
        self.require(ConsultationPhase::AwaitingDuration, "submit a duration")?;

        let parsed = SymptomDuration::parse_lenient(raw);
        if parsed.defaulted {
            tracing::warn!(session = %self.id, input = raw, "invalid duration, defaulting to 1 day");
        }
        self.advance(ConsultationPhase::Traversing)?;
        self.duration = Some(parsed.duration);
        Ok(parsed)
    }

    /// Walks the tree with a caller-supplied presence oracle.
    pub fn diagnose<F, E>(&mut self, tree: &DecisionTree, is_present: F) -> Result<&TraversalOutcome, E>
    where
        F: FnMut(&str) -> Result<bool, E>,
        E: From<SessionError>,
    {
        self.require(ConsultationPhase::Traversing, "diagnose")?;

        let outcome = traverse(tree, is_present)?;
        tracing::info!(
            session = %self.id,
            diagnosis = %outcome.diagnosis,
            leaf = outcome.leaf,
            depth = outcome.steps.len(),
            "reached diagnosis"
        );

        self.advance(ConsultationPhase::Done)?;
        let outcome: &TraversalOutcome = self.outcome.insert(outcome);
        Ok(outcome)
    }

    /// Walks the tree testing every split against the confirmed symptom.
    pub fn diagnose_confirmed(&mut self, tree: &DecisionTree) -> Result<&TraversalOutcome, SessionError> {
        let confirmed = self.confirmed_symptom.clone().unwrap_or_default();
        self.diagnose(tree, |symptom| Ok::<_, SessionError>(symptom == confirmed))
    }

    fn require(&self, expected: ConsultationPhase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn advance(&mut self, next: ConsultationPhase) -> Result<(), SessionError> {
        self.phase = self.phase.transition_to(next)?;
        Ok(())
    }
}
