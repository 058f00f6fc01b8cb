//! Core of the sprout plant-care simulator.
//!
//! A session binds one [`policy::TimingPolicy`] to one [`plant::Plant`] and
//! then applies [`care::CareAction`]s chosen by the user until they stop.
//!
//! ```text
//! CareSession
//!     |
//!     |-- prompt_until_member(species) --> &dyn TimingPolicy
//!     |
//!     '-- loop:
//!           prompt_until_member(action) --> CareAction
//!           policy.apply(action, plant)
//!               |
//!               '-- action.execute(plant, duration)
//!                     start -> decoration -> pause -> done -> plant.grow()
//!           prompt_until_member(yes/no)
//! ```
//!
//! All console traffic goes through the [`console::Console`] trait and every
//! simulated delay through [`console::Pacer`], so sessions run unchanged
//! against a terminal or a scripted test double.

pub mod care;
pub mod console;
pub mod error;
pub mod locale;
pub mod plant;
pub mod policy;
pub mod prompt;
pub mod session;

pub use care::{AppliedAction, CareAction};
pub use console::{CareContext, Console, Pacer};
pub use error::SessionError;
pub use locale::Locale;
pub use plant::{GrowthReport, Plant};
pub use policy::{DurationTable, PolicyRegistry, Species, TimingPolicy};
pub use session::{CareSession, SessionSummary};
