//! Prompt-until-valid input primitive.
//!
//! Every question in a session accepts answers from a small closed set of
//! tokens. [`prompt_until_member`] keeps asking until it gets one; there is
//! no retry limit and no default answer.

use crate::console::Console;
use crate::error::SessionError;

/// An ordered closed set of accepted tokens and the values they select.
#[derive(Debug, Clone)]
pub struct Choices<T> {
    entries: Vec<(String, T)>,
}

impl<T> Choices<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an accepted token. The first entry wins if a token repeats.
    pub fn with(mut self, token: impl Into<String>, value: T) -> Self {
        self.entries.push((token.into(), value));
        self
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, input: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(token, _)| token == input)
            .map(|(_, value)| value)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(token, _)| token.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Choices<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>, T> FromIterator<(S, T)> for Choices<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(token, value)| (token.into(), value))
                .collect(),
        }
    }
}

/// The three pieces of text a prompt loop shows.
#[derive(Debug, Clone)]
pub struct PromptText {
    /// Shown on the first attempt.
    pub first: String,
    /// Shown on every attempt after a rejection.
    pub retry: String,
    /// Printed after each rejected answer.
    pub rejection: String,
}

/// Ask until the answer is one of `choices`' tokens and return its value.
///
/// Fails only when the console fails or its input is closed.
pub fn prompt_until_member<'c, T>(
    console: &mut dyn Console,
    text: &PromptText,
    choices: &'c Choices<T>,
) -> Result<&'c T, SessionError> {
    let mut prompt = text.first.as_str();
    loop {
        let Some(answer) = console.ask(prompt)? else {
            return Err(SessionError::InputClosed {
                prompt: prompt.to_string(),
            });
        };

        if let Some(value) = choices.lookup(&answer) {
            return Ok(value);
        }

        tracing::debug!(input = %answer, "rejected input");
        console.say(&text.rejection)?;
        prompt = text.retry.as_str();
    }
}
