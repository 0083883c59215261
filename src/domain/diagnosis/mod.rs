//! Diagnosis session: phase machine, tree traversal and the final report.
//!
//! - `phase` - lifecycle of one consultation
//! - `duration` - lenient parsing of the days-symptomatic answer
//! - `traversal` - pure walk of the decision tree
//! - `session` - aggregate tying input, traversal and outcome together
//! - `report` - diagnosis summary with description, precautions and advice

mod duration;
mod phase;
mod report;
mod session;
mod traversal;

pub use duration::{ParsedDuration, SymptomDuration};
pub use phase::ConsultationPhase;
pub use report::{DiagnosisReport, SeverityAdvice, DEFAULT_SEVERITY_THRESHOLD};
pub use session::{DiagnosisSession, SessionError};
pub use traversal::{
    traverse, traverse_with_symptom, TraversalMode, TraversalOutcome, TraversalStep,
};
