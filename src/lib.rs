//! Symptom Sherpa - Interactive symptom checker
//!
//! This crate fits a decision tree on a table of symptom vectors labelled
//! with diagnoses, then walks a user through a tree-guided consultation and
//! reports the predicted diagnosis with its description and precautions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
