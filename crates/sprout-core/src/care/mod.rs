//! Care actions: the four things a user can do to a plant.
//!
//! Every action runs the same sequence:
//!
//! ```text
//! started line -> decoration -> pause(duration) -> finished line -> grow
//! ```
//!
//! The duration is supplied by the caller on each call, so a single
//! [`CareAction`] value can be reused freely.

use std::fmt;
use std::io;
use std::str::FromStr;
use std::time::Duration;

use crate::console::CareContext;
use crate::plant::{GrowthReport, Plant};

/// One care action as a policy applied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedAction {
    pub action: CareAction,
    /// The duration the action was run with.
    pub duration: Duration,
    /// Plant growth right after the action.
    pub growth_after: u32,
}

/// A user-selectable care action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CareAction {
    Water,
    Feed,
    ControlPests,
    AdjustSunlight,
}

impl CareAction {
    /// Every care action, in menu order.
    pub const ALL: [CareAction; 4] = [
        CareAction::Water,
        CareAction::Feed,
        CareAction::ControlPests,
        CareAction::AdjustSunlight,
    ];

    /// Perform this action on `plant`, blocking for `duration`.
    pub fn execute(
        self,
        plant: &mut Plant,
        duration: Duration,
        ctx: &mut CareContext<'_>,
    ) -> io::Result<GrowthReport> {
        let locale = ctx.locale;

        ctx.console.say(locale.action_started(self))?;
        ctx.console.say("")?;
        for line in locale.decoration(self) {
            ctx.console.say(line)?;
        }
        ctx.console.say("")?;

        tracing::debug!(action = %self, duration_secs = duration.as_secs_f64(), "pausing");
        ctx.pacer.pause(duration);

        ctx.console.say(locale.action_finished(self))?;

        let report = plant.grow();
        ctx.console
            .say(&locale.growth_progress(plant.name(), report.growth))?;
        if report.completed {
            ctx.console.say(&locale.growth_complete(plant.name()))?;
        }

        Ok(report)
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Water => "Water",
            Self::Feed => "Feed",
            Self::ControlPests => "ControlPests",
            Self::AdjustSunlight => "AdjustSunlight",
        };
        f.write_str(s)
    }
}

impl FromStr for CareAction {
    type Err = CareActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Water" => Ok(Self::Water),
            "Feed" => Ok(Self::Feed),
            "ControlPests" => Ok(Self::ControlPests),
            "AdjustSunlight" => Ok(Self::AdjustSunlight),
            other => Err(CareActionParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`CareAction`] string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid care action: {0:?}")]
pub struct CareActionParseError(pub String);
