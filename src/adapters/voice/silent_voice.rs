//! Voice output that says nothing.

use crate::ports::{VoiceError, VoiceOutput};

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentVoice;

impl VoiceOutput for SilentVoice {
    fn speak(&self, text: &str) -> Result<(), VoiceError> {
        tracing::trace!(text, "voice disabled, not speaking");
        Ok(())
    }
}
