// ⌨️ Input Collector - prompts, validation and re-prompting
// Produces a valid CreditRecord or a quit signal, never a partial record

use crate::credits::{parse_credit, CreditError, CreditKind, CreditRecord};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Case-insensitive token that ends the session at any prompt
pub const QUIT_TOKEN: &str = "q";

/// Result of a prompt: a value, or the user asked to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<T> {
    Value(T),
    Quit,
}

/// Answer to the "enter another set of data?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Quit,
}

pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_TOKEN)
}

/// Line-oriented collector over any reader/writer pair.
///
/// `main` drives it with locked stdin/stdout; tests drive it with in-memory
/// buffers. A closed input stream is treated as a quit.
pub struct InputCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InputCollector { input, output }
    }

    /// Give back the writer (tests inspect what was printed)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write text to the console
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to console")
    }

    /// Print `prompt` and read one line. `None` means end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line is just another unparseable entry.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("Failed to read from input")?;

        if read == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).trim().to_string()))
    }

    /// Read one credit field, re-prompting until the value is valid or the
    /// user quits.
    pub fn read_credit_value(&mut self, kind: CreditKind) -> Result<Entry<u32>> {
        let prompt = format!("Enter your total {} credits: ", kind.label());

        loop {
            let line = match self.prompt(&prompt)? {
                Some(line) => line,
                None => return Ok(Entry::Quit),
            };

            if is_quit(&line) {
                return Ok(Entry::Quit);
            }

            match parse_credit(&line) {
                Ok(value) => return Ok(Entry::Value(value)),
                Err(err) => {
                    debug!(field = kind.label(), input = %line, error = ?err, "rejected credit value");
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    /// Read PASS, DEFER and FAIL. A wrong total discards all three and starts
    /// over from PASS.
    pub fn read_student_record(&mut self) -> Result<Entry<CreditRecord>> {
        loop {
            let mut values = [0u32; 3];
            for (slot, kind) in values.iter_mut().zip(CreditKind::ALL) {
                match self.read_credit_value(kind)? {
                    Entry::Value(value) => *slot = value,
                    Entry::Quit => return Ok(Entry::Quit),
                }
            }

            match CreditRecord::new(values[0], values[1], values[2]) {
                Ok(record) => return Ok(Entry::Value(record)),
                // read_credit_value only yields allowed values, so this is
                // always a TotalMismatch
                Err(err) => {
                    if let CreditError::TotalMismatch(total) = err {
                        debug!(total, "credit total mismatch, restarting record");
                    }
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    /// Ask whether to enter another record. Only the quit token stops.
    pub fn ask_continue(&mut self) -> Result<Continuation> {
        let line = self.prompt(
            "\nWould you like to enter another set of data?\n\
             Enter 'y' for yes or 'q' to quit and view results: ",
        )?;

        match line {
            Some(answer) if !is_quit(&answer) => Ok(Continuation::Continue),
            _ => Ok(Continuation::Quit),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
