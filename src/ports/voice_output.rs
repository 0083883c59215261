//! Voice Output Port - Interface for optional text-to-speech.
//!
//! Speech is best-effort: callers log failures and carry on.

/// Errors that can occur while speaking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceError {
    #[error("Speech device unavailable: {0}")]
    Unavailable(String),

    #[error("Speech failed: {0}")]
    Failed(String),
}

/// Port for rendering text as speech.
pub trait VoiceOutput {
    /// Speak `text`, blocking until done.
    fn speak(&self, text: &str) -> Result<(), VoiceError>;
}

/// Speaks and logs any failure instead of returning it.
pub fn speak_best_effort(voice: &dyn VoiceOutput, text: &str) {
    if let Err(e) = voice.speak(text) {
        tracing::error!("Text-to-speech error: {}", e);
    }
}
