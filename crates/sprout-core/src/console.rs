//! Console and pacing seams.
//!
//! The simulator never touches stdin, stdout or the clock directly. The CLI
//! provides terminal-backed implementations; tests provide scripted ones.

use std::io;
use std::time::Duration;

use crate::locale::Locale;

/// Line-oriented text console.
pub trait Console {
    /// Write one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line of input.
    ///
    /// Returns `Ok(None)` once input is closed. Returned lines have their
    /// line terminator removed and are otherwise untouched.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Source of the simulated care-action delay.
///
/// A pause blocks the whole session for its duration and cannot be
/// cancelled.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Everything a care action needs besides the plant itself.
pub struct CareContext<'a> {
    pub console: &'a mut dyn Console,
    pub pacer: &'a mut dyn Pacer,
    pub locale: Locale,
}

impl<'a> CareContext<'a> {
    pub fn new(console: &'a mut dyn Console, pacer: &'a mut dyn Pacer, locale: Locale) -> Self {
        Self {
            console,
            pacer,
            locale,
        }
    }
}

/// Strip a single trailing `\n` or `\r\n` from a raw input line.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
