//! `sprout play` command: run one interactive care session.

use anyhow::{Context, Result};

use sprout_core::{CareSession, Console, Locale, Pacer, SessionSummary};

use crate::config::SproutConfig;
use crate::terminal::{SleepPacer, StdConsole};

/// Run a session on stdin/stdout with real (scaled) sleeps.
pub fn run_play(config: &SproutConfig) -> Result<()> {
    let mut console = StdConsole::stdio();
    let mut pacer = SleepPacer::new(config.time_scale);
    run_session(config.locale, &mut console, &mut pacer)?;
    Ok(())
}

/// Run a session over the given console and pacer.
pub fn run_session(
    locale: Locale,
    console: &mut dyn Console,
    pacer: &mut dyn Pacer,
) -> Result<SessionSummary> {
    let summary = CareSession::new(locale, console, pacer)
        .run()
        .context("care session ended before the user finished")?;

    tracing::debug!(
        species = %summary.species,
        growth = summary.plant.growth(),
        actions = summary.actions.len(),
        total_secs = summary
            .actions
            .iter()
            .map(|a| a.duration.as_secs())
            .sum::<u64>(),
        "session summary"
    );

    Ok(summary)
}
