//! Domain layer containing the symptom checker's business logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, state machine, errors)
//! - `symptoms` - Symptom vocabulary and fuzzy matching of user input
//! - `reference` - Severity, description and precaution lookups
//! - `classifier` - Decision tree model and training table
//! - `diagnosis` - Consultation session, tree traversal and reporting

pub mod classifier;
pub mod diagnosis;
pub mod foundation;
pub mod reference;
pub mod symptoms;
