//! # Terminal
//!
//! Line-oriented operator input. A prompt is written and flushed, then one
//! line is read and returned without its line terminator. Nothing else is
//! trimmed: `" v"` stays `" v"`.

use std::io::{self, BufRead, Write};

/// Errors reading operator input.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// Input closed before a line was entered.
    #[error("input closed before a line was entered")]
    EndOfInput,
}

/// Operator terminal: an input line source and an output sink.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `text` and wait for one line of input.
    pub fn prompt(&mut self, text: &str) -> Result<String, TerminalError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TerminalError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Sink for everything that is not a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
