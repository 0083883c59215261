//! Voice output that records what it was asked to say.
//!
//! Used by tests to check what would have been spoken, and to simulate a
//! broken audio device.

use std::cell::RefCell;

use crate::ports::{VoiceError, VoiceOutput};

#[derive(Debug, Default)]
pub struct RecordingVoice {
    spoken: RefCell<Vec<String>>,
    failure: Option<VoiceError>,
}

impl RecordingVoice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call records the text and then fails with `error`.
    pub fn failing_with(error: VoiceError) -> Self {
        Self {
            spoken: RefCell::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.borrow().clone()
    }
}

impl VoiceOutput for RecordingVoice {
    fn speak(&self, text: &str) -> Result<(), VoiceError> {
        self.spoken.borrow_mut().push(text.to_string());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let voice = RecordingVoice::new();
        voice.speak("one").unwrap();
        voice.speak("two").unwrap();
        assert_eq!(voice.spoken(), vec!["one", "two"]);
    }

    #[test]
    fn failing_voice_still_records() {
        let voice = RecordingVoice::failing_with(VoiceError::Unavailable("muted".into()));
        assert!(voice.speak("hello").is_err());
        assert_eq!(voice.spoken(), vec!["hello"]);
    }
}
