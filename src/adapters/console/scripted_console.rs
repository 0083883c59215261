//! Console fed from a fixed list of answers.

use std::collections::VecDeque;

use crate::ports::{Console, ConsoleError};

/// Answers prompts from a queue and records everything shown to the user.
///
/// Once the queue is empty every prompt fails with `ConsoleError::Closed`.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Prompts and printed lines, in order. Answers are appended to their
    /// prompt line.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let answer = self.answers.pop_front();
        self.transcript
            .push(format!("{}{}", prompt, answer.as_deref().unwrap_or("")));
        answer.ok_or(ConsoleError::Closed)
    }

    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}
