//! Terminal-backed console and a sleeping pacer.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use sprout_core::console::{Console, Pacer, trim_line_ending};

/// Console over any buffered reader and writer; stdin/stdout in the binary.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and can never match a token.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(trim_line_ending(&line).to_string()))
    }
}

/// Pacer that blocks the current thread.
///
/// The requested duration is multiplied by `time_scale` before sleeping;
/// the duration the policy assigned is unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer {
    time_scale: f64,
}

impl SleepPacer {
    pub fn new(time_scale: f64) -> Self {
        Self { time_scale }
    }

    /// The wall-clock time a pause of `duration` will actually take.
    pub fn scaled(&self, duration: Duration) -> Duration {
        match Duration::try_from_secs_f64(duration.as_secs_f64() * self.time_scale) {
            Ok(scaled) => scaled,
            Err(e) => {
                tracing::warn!(
                    time_scale = self.time_scale,
                    error = %e,
                    "cannot scale pause, using the unscaled duration"
                );
                duration
            }
        }
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        let wait = self.scaled(duration);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}
