//! Line-oriented prompting.
//!
//! Each read prints a label, reads one line and converts it. Numeric fields that
//! fail to parse print the error and ask again, so a typo never ends the session.

use std::borrow::Cow;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use clinic_core::{ClinicError, NonEmptyText};

use crate::error::{CliError, CliResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> CliResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line verbatim, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    /// Returns [`CliError::InputClosed`] at end of input.
    pub fn text(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(CliError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::debug!("replaced invalid UTF-8 in input line");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads a non-empty identifier, asking again while the line is blank.
    pub fn identifier(&mut self, label: &str) -> CliResult<NonEmptyText> {
        loop {
            let line = self.text(label)?;
            match NonEmptyText::new(&line) {
                Ok(text) => return Ok(text),
                Err(e) => self.reject(&line, e)?,
            }
        }
    }

    /// Reads a value parsed with [`FromStr`], asking again until it parses.
    pub fn number<T>(&mut self, label: &str) -> CliResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let line = self.text(label)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => self.reject(&line, e)?,
            }
        }
    }

    fn reject(&mut self, line: &str, reason: impl Display) -> CliResult<()> {
        let err = ClinicError::InvalidInput(reason.to_string());
        tracing::debug!(input = line, "re-prompting after invalid input");
        self.say(format!("{err}. Try again."))
    }
}
