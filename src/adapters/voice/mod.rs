//! Voice Adapters
//!
//! Implementations of the `VoiceOutput` port.
//!
//! - **CommandVoice** - Runs an external speech program once per utterance
//! - **SilentVoice** - Speech disabled
//! - **RecordingVoice** - Captures utterances (testing)

mod command_voice;
mod recording_voice;
mod silent_voice;

pub use command_voice::CommandVoice;
pub use recording_voice::RecordingVoice;
pub use silent_voice::SilentVoice;
