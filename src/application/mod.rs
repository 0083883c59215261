//! Application layer - Handlers for startup and consultations.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Startup builds the knowledge base once; each consultation then reads from it.

pub mod handlers;

pub use handlers::{
    // Startup
    holdout_accuracy, KnowledgeBase, LoadKnowledgeBaseHandler, StartupError,
    // Consultation
    ConsultationError, ConsultationResult, RunConsultationHandler, BANNER,
};
