//! Application handlers.
//!
//! Handlers that orchestrate domain operations through the ports.

pub mod consultation;
pub mod startup;

pub use consultation::{ConsultationError, ConsultationResult, RunConsultationHandler, BANNER};
pub use startup::{holdout_accuracy, KnowledgeBase, LoadKnowledgeBaseHandler, StartupError};
