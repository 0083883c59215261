//! Integration tests for a full consultation.
//!
//! These tests verify the end-to-end flow:
//! 1. CSV tables are read from a data directory
//! 2. The CART classifier is fitted and scored on the testing table
//! 3. A scripted user walks through the consultation
//! 4. The report is printed and the verdict spoken
//!
//! Uses temporary files, a scripted console and a recording voice.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;

use symptom_sherpa::adapters::{
    CartClassifier, CsvDataset, DatasetPaths, RecordingVoice, ScriptedConsole,
};
use symptom_sherpa::application::{
    ConsultationError, KnowledgeBase, LoadKnowledgeBaseHandler, RunConsultationHandler,
    StartupError,
};
use symptom_sherpa::domain::diagnosis::TraversalMode;
use symptom_sherpa::ports::{ConsoleError, LoadError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const TRAINING: &str = "\
itching,skin_rash,nodal_skin_eruptions,chills,prognosis
1,1,1,0,Fungal infection
1,0,0,0,Drug Reaction
0,0,0,1,Malaria
0,0,0,0,Allergy
";

const SEVERITY: &str = "\
itching,1
skin_rash,3
nodal_skin_eruptions,4
chills,3
not_a_row
";

const DESCRIPTIONS: &str = "\
Drug Reaction,\"An adverse drug reaction (ADR) is an injury caused by taking medication.\"
Fungal infection,\"In humans, fungal infections occur when an invading fungus takes over an area of the body.\"
";

const PRECAUTIONS: &str = "\
Drug Reaction,stop irritation,consult nearest hospital,stop taking drug,follow up
Fungal infection,bath twice,use detol or neem in bathing water,keep infected area dry,use clean cloths
";

fn write_tables(dir: &Path) {
    fs::write(dir.join("Training.csv"), TRAINING).unwrap();
    fs::write(dir.join("Testing.csv"), TRAINING).unwrap();
    fs::write(dir.join("Symptom_severity.csv"), SEVERITY).unwrap();
    fs::write(dir.join("symptom_Description.csv"), DESCRIPTIONS).unwrap();
    fs::write(dir.join("symptom_precaution.csv"), PRECAUTIONS).unwrap();
}

fn load(dir: &Path) -> Result<KnowledgeBase, StartupError> {
    let dataset = CsvDataset::new(DatasetPaths::in_dir(dir));
    LoadKnowledgeBaseHandler::new(Rc::new(dataset), Rc::new(CartClassifier::new())).handle()
}

fn knowledge() -> (TempDir, Rc<KnowledgeBase>) {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path());
    let kb = load(dir.path()).unwrap();
    (dir, Rc::new(kb))
}

fn has_line(console: &ScriptedConsole, line: &str) -> bool {
    console.transcript().iter().any(|l| l == line)
}

// =============================================================================
// Startup
// =============================================================================

#[test]
fn startup_loads_tables_and_scores_the_tree() {
    let (_dir, kb) = knowledge();

    assert_eq!(kb.vocabulary.len(), 4);
    assert_eq!(kb.reference.severity_of("chills"), Some(3));
    assert_eq!(kb.reference.severity_of("not_a_row"), None);
    assert!(kb.reference.precautions_for("Drug Reaction").is_some());
    assert_eq!(kb.holdout_accuracy, Some(1.0));
    assert_eq!(
        kb.tree.classes(),
        &["Allergy", "Drug Reaction", "Fungal infection", "Malaria"]
    );
}

#[test]
fn missing_training_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path());
    fs::remove_file(dir.path().join("Training.csv")).unwrap();

    match load(dir.path()) {
        Err(StartupError::Load(LoadError::MissingFile(path))) => {
            assert!(path.ends_with("Training.csv"));
        }
        other => panic!("expected missing file, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_reference_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_tables(dir.path());
    fs::remove_file(dir.path().join("symptom_precaution.csv")).unwrap();

    assert!(matches!(
        load(dir.path()),
        Err(StartupError::Load(LoadError::MissingFile(_)))
    ));
}

// =============================================================================
// Consultation
// =============================================================================

#[test]
fn itching_for_four_days_reports_drug_reaction() {
    let (_dir, kb) = knowledge();
    let voice = Rc::new(RecordingVoice::new());
    let handler = RunConsultationHandler::new(kb, voice.clone());
    let mut console = ScriptedConsole::new(["Ada", "itching", "4"]);

    let result = handler.handle(&mut console).unwrap();

    assert_eq!(result.report.diagnosis, "Drug Reaction");
    assert!(has_line(&console, "Hello, Ada! Let's begin diagnosing."));
    assert!(has_line(&console, "Predicted disease: Drug Reaction"));
    assert!(has_line(
        &console,
        "Description: An adverse drug reaction (ADR) is an injury caused by taking medication."
    ));
    assert!(has_line(&console, "Symptoms provided: itching"));
    assert!(has_line(&console, "Days with symptoms: 4"));
    assert!(has_line(&console, "Final Diagnosis: Drug Reaction"));
    assert!(has_line(&console, "Suggested Precautions:"));
    for precaution in [
        "stop irritation",
        "consult nearest hospital",
        "stop taking drug",
        "follow up",
    ] {
        assert!(has_line(&console, &format!("- {}", precaution)));
    }
    assert_eq!(voice.spoken().len(), 1);
    assert!(voice.spoken()[0].starts_with("You may have Drug Reaction."));
}

#[test]
fn repeated_consultations_agree() {
    let (_dir, kb) = knowledge();
    let handler = RunConsultationHandler::new(kb, Rc::new(RecordingVoice::new()));

    let first = handler
        .handle(&mut ScriptedConsole::new(["Ada", "itching", "4"]))
        .unwrap();
    let second = handler
        .handle(&mut ScriptedConsole::new(["Bo", "itching", "9"]))
        .unwrap();

    assert_eq!(first.outcome.diagnosis, second.outcome.diagnosis);
    assert_eq!(first.outcome.steps, second.outcome.steps);
    assert_ne!(first.session_id, second.session_id);
}

#[test]
fn typo_is_corrected_before_diagnosis() {
    let (_dir, kb) = knowledge();
    let classes = kb.tree.classes().to_vec();
    let handler = RunConsultationHandler::new(kb, Rc::new(RecordingVoice::new()));
    let mut console = ScriptedConsole::new(["Ada", "nodal skin eruption", "2"]);

    let result = handler.handle(&mut console).unwrap();

    assert!(has_line(&console, "Using closest match: nodal_skin_eruptions"));
    assert!(classes.contains(&result.report.diagnosis));
}

#[test]
fn ask_each_node_reaches_the_confirmed_diagnosis() {
    let (_dir, kb) = knowledge();
    let handler = RunConsultationHandler::new(kb, Rc::new(RecordingVoice::new()))
        .with_mode(TraversalMode::AskEachNode);
    let mut console = ScriptedConsole::new(["Ada", "chills", "3", "n", "n", "n", "n"]);

    let result = handler.handle(&mut console).unwrap();

    assert_eq!(result.report.diagnosis, "Malaria");
    assert!(has_line(&console, "Precautions not available for the predicted disease."));
    assert!(has_line(&console, "Description not available for Malaria."));
}

#[test]
fn abandoning_the_session_is_reported_as_closed_input() {
    let (_dir, kb) = knowledge();
    let voice = Rc::new(RecordingVoice::new());
    let handler = RunConsultationHandler::new(kb, voice.clone());
    let mut console = ScriptedConsole::new(["Ada", "not a symptom at all"]);

    let err = handler.handle(&mut console).unwrap_err();

    assert!(matches!(err, ConsultationError::Console(ConsoleError::Closed)));
    assert!(has_line(&console, "Symptom not recognized. Please try again."));
    assert!(voice.spoken().is_empty());
}
