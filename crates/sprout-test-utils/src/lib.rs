//! Shared test doubles for sprout integration tests.
//!
//! - [`ScriptedConsole`] answers prompts from a fixed list of input lines
//!   and records everything shown, in order.
//! - [`RecordingPacer`] records every requested pause instead of sleeping,
//!   so sessions with multi-second care actions run instantly.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use sprout_core::console::{Console, Pacer};

/// One entry in a [`ScriptedConsole`] transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Output written with [`Console::say`].
    Said(String),
    /// A prompt shown by [`Console::ask`], with the answer given (or `None`
    /// if the script had run out).
    Asked { prompt: String, answer: Option<String> },
}

/// A console that replays scripted answers.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<Line>,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `answers`, in order, and
    /// reports closed input once they run out.
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

    pub fn transcript(&self) -> &[Line] {
        &self.transcript
    }

    /// All lines written with `say`, in order.
    pub fn said(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|line| match line {
                Line::Said(text) => Some(text.as_str()),
                Line::Asked { .. } => None,
            })
            .collect()
    }

    /// All prompts shown, in order.
    pub fn prompts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|line| match line {
                Line::Asked { prompt, .. } => Some(prompt.as_str()),
                Line::Said(_) => None,
            })
            .collect()
    }

    /// Number of output lines containing `needle`.
    pub fn count_said(&self, needle: &str) -> usize {
        self.said().iter().filter(|l| l.contains(needle)).count()
    }

    /// Answers the script has not handed out yet.
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(Line::Said(line.to_string()));
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer = self.answers.pop_front();
        self.transcript.push(Line::Asked {
            prompt: prompt.to_string(),
            answer: answer.clone(),
        });
        Ok(answer)
    }
}

/// A pacer that records pauses and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
