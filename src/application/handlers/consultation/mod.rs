//! Consultation handlers.

mod run_consultation;

pub use run_consultation::{
    ConsultationError, ConsultationResult, RunConsultationHandler, BANNER,
};
