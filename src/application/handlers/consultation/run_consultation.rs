//! RunConsultationHandler - Drives one interactive consultation.
//!
//! Greets the user, settles on one recognised symptom and a duration, walks
//! the decision tree, prints the report and speaks the verdict.

use std::rc::Rc;

use thiserror::Error;

use crate::application::handlers::startup::KnowledgeBase;
use crate::domain::diagnosis::{
    DiagnosisReport, DiagnosisSession, SessionError, SymptomDuration, TraversalMode,
    TraversalOutcome, TraversalStep, DEFAULT_SEVERITY_THRESHOLD,
};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::symptoms::SymptomMatcher;
use crate::ports::{speak_best_effort, Console, ConsoleError, VoiceOutput};

/// First line printed to the user.
pub const BANNER: &str = "-----Symptom Sherpa-----";

const NAME_PROMPT: &str = "Your Name? -> ";
const SYMPTOM_PROMPT: &str = "Enter the symptom you are experiencing -> ";
const NOT_RECOGNIZED: &str = "Symptom not recognized. Please try again.";
const DURATION_DEFAULTED: &str = "Invalid input. Defaulting to 1 day.";
const ANSWER_YES_OR_NO: &str = "Please answer yes or no.";

/// Errors that end a consultation early.
#[derive(Debug, Error)]
pub enum ConsultationError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result of a completed consultation.
#[derive(Debug, Clone)]
pub struct ConsultationResult {
    pub session_id: SessionId,
    pub patient_name: String,
    pub outcome: TraversalOutcome,
    pub report: DiagnosisReport,
}

/// Handler for running consultations against a loaded knowledge base.
pub struct RunConsultationHandler {
    knowledge: Rc<KnowledgeBase>,
    voice: Rc<dyn VoiceOutput>,
    matcher: SymptomMatcher,
    mode: TraversalMode,
    severity_threshold: f64,
}

impl RunConsultationHandler {
    pub fn new(knowledge: Rc<KnowledgeBase>, voice: Rc<dyn VoiceOutput>) -> Self {
        Self {
            knowledge,
            voice,
            matcher: SymptomMatcher::default(),
            mode: TraversalMode::default(),
            severity_threshold: DEFAULT_SEVERITY_THRESHOLD,
        }
    }

    pub fn with_matcher(mut self, matcher: SymptomMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_severity_threshold(mut self, threshold: f64) -> Self {
        self.severity_threshold = threshold;
        self
    }

    pub fn handle(&self, console: &mut dyn Console) -> Result<ConsultationResult, ConsultationError> {
        // 1. Greet
        console.say(BANNER)?;
        let patient_name = console.prompt(NAME_PROMPT)?.trim().to_string();
        if patient_name.is_empty() {
            console.say("Hello! Let's begin diagnosing.")?;
        } else {
            console.say(&format!("Hello, {}! Let's begin diagnosing.", patient_name))?;
        }

        let mut session = DiagnosisSession::new();
        tracing::info!(session = %session.id(), mode = ?self.mode, "consultation started");

        // 2. Symptom, re-prompting until one is recognised
        let symptom = self.ask_symptom(&mut session, console)?;

        // 3. Duration
        let raw = console.prompt(&format!(
            "How many days have you been experiencing {}? ",
            symptom
        ))?;
        if session.submit_duration(&raw)?.defaulted {
            console.say(DURATION_DEFAULTED)?;
        }

        // 4. Walk the tree
        let outcome = match self.mode {
            TraversalMode::ConfirmedSymptom => {
                let outcome = session.diagnose_confirmed(&self.knowledge.tree)?.clone();
                for step in &outcome.steps {
                    console.say(&trace_line(step))?;
                }
                outcome
            }
            TraversalMode::AskEachNode => self.ask_each_node(&mut session, console, &symptom)?,
        };

        // 5. Report and speak
        let report = DiagnosisReport::compile(
            &outcome,
            session.confirmed_symptom(),
            session.duration().unwrap_or(SymptomDuration::DEFAULT),
            &self.knowledge.reference,
            self.severity_threshold,
        );
        console.say("")?;
        for line in report.to_string().lines() {
            console.say(line)?;
        }

        match report.to_json() {
            Ok(json) => tracing::debug!(session = %session.id(), report = %json, "report compiled"),
            Err(e) => tracing::warn!(session = %session.id(), error = %e, "report not serializable"),
        }
        speak_best_effort(self.voice.as_ref(), &report.spoken_summary());

        let elapsed = Timestamp::now().duration_since(&session.started_at());
        tracing::info!(
            session = %session.id(),
            diagnosis = %report.diagnosis,
            elapsed_secs = elapsed.num_seconds(),
            "consultation complete"
        );

        Ok(ConsultationResult {
            session_id: session.id(),
            patient_name,
            outcome,
            report,
        })
    }

    fn ask_symptom(
        &self,
        session: &mut DiagnosisSession,
        console: &mut dyn Console,
    ) -> Result<String, ConsultationError> {
        loop {
            let raw = console.prompt(SYMPTOM_PROMPT)?;
            match session.submit_symptom(&raw, &self.matcher, &self.knowledge.vocabulary)? {
                Some(found) => {
                    if !found.exact {
                        console.say(&format!("Using closest match: {}", found.symptom))?;
                    }
                    return Ok(found.symptom);
                }
                None => console.say(NOT_RECOGNIZED)?,
            }
        }
    }

    /// Asks about every split's symptom; the confirmed one is answered yes.
    fn ask_each_node(
        &self,
        session: &mut DiagnosisSession,
        console: &mut dyn Console,
        confirmed: &str,
    ) -> Result<TraversalOutcome, ConsultationError> {
        let outcome = session.diagnose(
            &self.knowledge.tree,
            |symptom: &str| -> Result<bool, ConsultationError> {
                if symptom == confirmed {
                    console.say(&format!("{}yes", question(symptom)))?;
                    return Ok(true);
                }
                Ok(ask_yes_no(console, &question(symptom))?)
            },
        )?;
        Ok(outcome.clone())
    }
}

fn question(symptom: &str) -> String {
    format!("Are you experiencing {}? ", symptom)
}

fn trace_line(step: &TraversalStep) -> String {
    let answer = if step.present { "yes" } else { "no" };
    format!("{}{}", question(&step.symptom), answer)
}

fn ask_yes_no(console: &mut dyn Console, prompt: &str) -> Result<bool, ConsoleError> {
    loop {
        let answer = console.prompt(prompt)?;
        match parse_answer(&answer) {
            Some(present) => return Ok(present),
            None => console.say(ANSWER_YES_OR_NO)?,
        }
    }
}

fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
