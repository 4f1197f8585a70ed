//! Line-oriented terminal prompts

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use thiserror::Error;

/// The input stream reached end-of-file
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to output")
    }

    /// Show `prompt` and read one line, without its line ending
    ///
    /// Fails with [`InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt).context("Failed to write to output")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Read a menu selection; `None` if the answer is not a number
    pub fn ask_choice(&mut self, prompt: &str) -> Result<Option<u32>> {
        Ok(self.ask(prompt)?.trim().parse().ok())
    }

    /// Read a whole number, asking again until one is given
    pub fn ask_number(&mut self, prompt: &str) -> Result<u32> {
        loop {
            match self.ask(prompt)?.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    /// Read a number where blank means "unchanged"
    ///
    /// Blank and unparsable answers both yield 0; the latter is reported.
    pub fn ask_optional_number(&mut self, prompt: &str) -> Result<u32> {
        let answer = self.ask(prompt)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(0);
        }

        match answer.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                self.say("Invalid input. Keeping current value.")?;
                Ok(0)
            }
        }
    }

    /// Ask a yes/no question until the answer is Y or N (any case)
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let mut answer = self.ask(prompt)?;
        loop {
            match answer.trim().to_uppercase().as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => answer = self.ask("Invalid selection. Please select Y or N: ")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
