//! Console Port - Interface for the line-oriented user dialogue.

/// Errors that can occur while talking to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("Input closed")]
    Closed,

    #[error("Console IO error: {0}")]
    Io(String),
}

/// Port for prompting the user and printing output.
pub trait Console {
    /// Show `prompt` and read one line without its trailing newline.
    ///
    /// # Errors
    /// Returns `ConsoleError::Closed` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Print one line of output.
    fn say(&mut self, line: &str) -> Result<(), ConsoleError>;
}
