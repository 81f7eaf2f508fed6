//! Line-oriented console
//!
//! Writes prompts and reads answers one line at a time. Numeric answers are
//! parsed into `Result<_, ParseError>` and handed to the configured
//! `InvalidInputPolicy`: reprompt with the same text, or abort.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::domain::value_objects::InvalidInputPolicy;
use crate::error::{NumberKind, ParseError, RecipeError, RecipeResult};

/// Parse a trimmed line as a number of the expected kind
pub fn parse_number<T: FromStr>(
    input: &str,
    field: &'static str,
    kind: NumberKind,
) -> Result<T, ParseError> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| ParseError::new(field, input, kind))
}

/// Prompt/response console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
    policy: InvalidInputPolicy,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, policy: InvalidInputPolicy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    pub fn policy(&self) -> InvalidInputPolicy {
        self.policy
    }

    /// Write one line of text
    pub fn say(&mut self, text: &str) -> RecipeResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` and read the answer. `None` means input ended.
    pub fn ask(&mut self, prompt: &str) -> RecipeResult<Option<String>> {
        self.say(prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Like `ask`, but end of input is an error
    pub fn ask_required(&mut self, prompt: &str) -> RecipeResult<String> {
        self.ask(prompt)?.ok_or_else(|| RecipeError::InputClosed {
            prompt: prompt.to_string(),
        })
    }

    /// Ask until the answer parses as `T`, or the abort policy gives up
    pub fn ask_number<T: FromStr>(
        &mut self,
        prompt: &str,
        field: &'static str,
        kind: NumberKind,
    ) -> RecipeResult<T> {
        loop {
            let line = self.ask_required(prompt)?;
            match parse_number(&line, field, kind) {
                Ok(value) => return Ok(value),
                Err(err) => self.reject(err)?,
            }
        }
    }

    /// Apply the invalid-input policy to a parse failure.
    ///
    /// Returns `Ok(())` when the caller should ask again.
    pub fn reject(&mut self, err: ParseError) -> RecipeResult<()> {
        tracing::info!(field = err.field, input = %err.input, policy = ?self.policy, "invalid input");
        match self.policy {
            InvalidInputPolicy::Reprompt => {
                self.say(&format!("Invalid input: {}. Please try again.", err))
            }
            InvalidInputPolicy::Abort => Err(err.into()),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> RecipeResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
