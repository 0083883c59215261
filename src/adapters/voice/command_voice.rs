//! Speech through an external program such as `espeak`.
//!
//! The program is started for each utterance, waited on, and released.
//! A missing program is reported as `VoiceError::Unavailable`.

use std::io::ErrorKind;
use std::process::{Command, Stdio};

use crate::ports::{VoiceError, VoiceOutput};

/// Runs `<program> -s <rate> <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVoice {
    program: String,
    rate: u32,
}

impl CommandVoice {
    pub fn new(program: impl Into<String>, rate: u32) -> Self {
        Self {
            program: program.into(),
            rate,
        }
    }

    fn command(&self, text: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-s")
            .arg(self.rate.to_string())
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl VoiceOutput for CommandVoice {
    fn speak(&self, text: &str) -> Result<(), VoiceError> {
        let status = self.command(text).status().map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                VoiceError::Unavailable(format!("'{}' is not installed", self.program))
            }
            _ => VoiceError::Unavailable(e.to_string()),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(VoiceError::Failed(format!("'{}' exited with {}", self.program, status)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_unavailable() {
        let voice = CommandVoice::new("definitely-not-a-speech-program-3f9a", 130);
        let err = voice.speak("hello").unwrap_err();
        assert!(matches!(err, VoiceError::Unavailable(msg) if msg.contains("not installed")));
    }

    #[test]
    fn passes_rate_and_text() {
        let voice = CommandVoice::new("espeak", 130);
        let command = voice.command("You may have Malaria.");
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["-s", "130", "You may have Malaria."]);
        assert_eq!(command.get_program(), "espeak");
    }
}
