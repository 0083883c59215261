//! Terminal console over stdin and stdout.

use std::io::{self, BufRead, Write};

use crate::ports::{Console, ConsoleError};

#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(e: io::Error) -> ConsoleError {
    ConsoleError::Io(e.to_string())
}

impl Console for StdConsole {
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt).map_err(io_error)?;
        stdout.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(io::stdout().lock(), "{}", line).map_err(io_error)
    }
}
