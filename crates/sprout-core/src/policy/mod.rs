//! Species-specific timing policies.
//!
//! Each species owns a [`DurationTable`] that says how long every
//! [`CareAction`] takes for it. The table is a plain struct with one field
//! per action, so every action always has a duration.
//!
//! # Architecture
//!
//! ```text
//! CareSession
//!     |
//!     v
//! PolicyRegistry --get(Species::Rose)--> &dyn TimingPolicy
//!                                              |
//!                        apply(action, plant) -+
//!                                              |
//!                     durations().duration_for(action)
//!                                              |
//!                                              v
//!                          action.execute(plant, duration)
//! ```

pub mod builtin;
pub mod registry;
pub mod trait_def;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::care::CareAction;

pub use builtin::{CactusPolicy, RosePolicy, TomatoPolicy};
pub use registry::PolicyRegistry;
pub use trait_def::TimingPolicy;

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Plant species the simulator knows how to care for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Cactus,
    Rose,
    Tomato,
}

impl Species {
    /// Every species, in menu order.
    pub const ALL: [Species; 3] = [Species::Cactus, Species::Rose, Species::Tomato];

    /// The built-in timing policy for this species.
    pub fn builtin_policy(self) -> Box<dyn TimingPolicy> {
        match self {
            Self::Cactus => Box::new(CactusPolicy),
            Self::Rose => Box::new(RosePolicy),
            Self::Tomato => Box::new(TomatoPolicy),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Cactus => "Cactus",
            Self::Rose => "Rose",
            Self::Tomato => "Tomato",
        };
        f.write_str(s)
    }
}

impl FromStr for Species {
    type Err = SpeciesParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cactus" => Ok(Self::Cactus),
            "Rose" => Ok(Self::Rose),
            "Tomato" => Ok(Self::Tomato),
            other => Err(SpeciesParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`Species`] string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid species: {0:?}")]
pub struct SpeciesParseError(pub String);

// ---------------------------------------------------------------------------
// DurationTable
// ---------------------------------------------------------------------------

/// How long each care action takes, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationTable {
    pub water: u64,
    pub feed: u64,
    pub control_pests: u64,
    pub adjust_sunlight: u64,
}

impl DurationTable {
    pub const fn from_secs(water: u64, feed: u64, control_pests: u64, adjust_sunlight: u64) -> Self {
        Self {
            water,
            feed,
            control_pests,
            adjust_sunlight,
        }
    }

    pub fn secs_for(&self, action: CareAction) -> u64 {
        match action {
            CareAction::Water => self.water,
            CareAction::Feed => self.feed,
            CareAction::ControlPests => self.control_pests,
            CareAction::AdjustSunlight => self.adjust_sunlight,
        }
    }

    pub fn duration_for(&self, action: CareAction) -> Duration {
        Duration::from_secs(self.secs_for(action))
    }
}
