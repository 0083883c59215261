//! Symptom Sherpa command-line entry point.

use std::process::ExitCode;
use std::rc::Rc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symptom_sherpa::adapters::{
    CartClassifier, CommandVoice, CsvDataset, DatasetPaths, SilentVoice, StdConsole,
};
use symptom_sherpa::application::{
    ConsultationError, LoadKnowledgeBaseHandler, RunConsultationHandler,
};
use symptom_sherpa::config::AppConfig;
use symptom_sherpa::domain::symptoms::SymptomMatcher;
use symptom_sherpa::ports::{ConsoleError, VoiceOutput};

fn main() -> ExitCode {
    let loaded = AppConfig::load();

    // Logs go to stderr so they stay out of the dialogue on stdout
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "symptom_sherpa=info".to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let validated = loaded.and_then(|config| {
        config.validate()?;
        Ok(config)
    });
    let config = match validated {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let data = &config.data;
    let dataset = CsvDataset::new(DatasetPaths {
        severity: data.severity_path(),
        description: data.description_path(),
        precaution: data.precaution_path(),
        training: data.training_path(),
        testing: data.testing_path(),
    });
    let classifier = CartClassifier::new()
        .with_max_depth(config.classifier.max_depth)
        .with_min_samples_split(config.classifier.min_samples_split);

    let startup = LoadKnowledgeBaseHandler::new(Rc::new(dataset), Rc::new(classifier));
    let knowledge = match startup.handle() {
        Ok(knowledge) => knowledge,
        Err(e) => {
            error!("Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let matcher = match SymptomMatcher::new(config.matcher.cutoff) {
        Ok(matcher) => matcher,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let voice: Rc<dyn VoiceOutput> = if config.voice.enabled {
        info!(command = %config.voice.command, rate = config.voice.rate, "voice output enabled");
        Rc::new(CommandVoice::new(config.voice.command.clone(), config.voice.rate))
    } else {
        Rc::new(SilentVoice)
    };

    let handler = RunConsultationHandler::new(Rc::new(knowledge), voice)
        .with_matcher(matcher)
        .with_mode(config.consultation.mode)
        .with_severity_threshold(config.consultation.severity_threshold);

    match handler.handle(&mut StdConsole::new()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(ConsultationError::Console(ConsoleError::Closed)) => {
            info!("input closed, ending consultation");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Consultation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
