//! Voice output configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Text-to-speech settings
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    /// Speak the verdict aloud
    #[serde(default)]
    pub enabled: bool,

    /// Speech program invoked per utterance
    #[serde(default = "default_command")]
    pub command: String,

    /// Words per minute
    #[serde(default = "default_rate")]
    pub rate: u32,
}

fn default_command() -> String {
    "espeak".to_string()
}

fn default_rate() -> u32 {
    130
}

impl VoiceConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if self.command.trim().is_empty() {
            return Err(ValidationError::MissingRequired("voice.command"));
        }
        if self.rate == 0 || self.rate > 500 {
            return Err(ValidationError::InvalidSpeechRate(self.rate));
        }
        Ok(())
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_command(),
            rate: default_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_voice_skips_checks() {
        let config = VoiceConfig {
            enabled: false,
            command: String::new(),
            rate: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn enabled_voice_needs_command_and_rate() {
        let mut config = VoiceConfig {
            enabled: true,
            ..VoiceConfig::default()
        };
        assert!(config.validate().is_ok());

        config.rate = 900;
        assert_eq!(config.validate(), Err(ValidationError::InvalidSpeechRate(900)));

        config.rate = 130;
        config.command = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("voice.command"))
        );
    }
}
