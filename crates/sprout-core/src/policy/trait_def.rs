//! The `TimingPolicy` trait -- the strategy interface for species care.
//!
//! The trait is object-safe so policies can be stored as
//! `Box<dyn TimingPolicy>` in the [`super::PolicyRegistry`].

use std::io;
use std::time::Duration;

use crate::care::{AppliedAction, CareAction};
use crate::console::CareContext;
use crate::plant::Plant;

use super::{DurationTable, Species};

/// Species-specific timing for care actions.
pub trait TimingPolicy: Send + Sync {
    /// The species this policy cares for.
    fn species(&self) -> Species;

    /// The fixed duration table for this species.
    fn durations(&self) -> &DurationTable;

    fn duration_for(&self, action: CareAction) -> Duration {
        self.durations().duration_for(action)
    }

    /// Run `action` on `plant` using this policy's duration for it.
    ///
    /// The returned record carries the duration the pacer was given.
    fn apply(
        &self,
        action: CareAction,
        plant: &mut Plant,
        ctx: &mut CareContext<'_>,
    ) -> io::Result<AppliedAction> {
        let duration = self.duration_for(action);
        tracing::debug!(
            species = %self.species(),
            action = %action,
            duration_secs = duration.as_secs(),
            "applying care action"
        );
        let report = action.execute(plant, duration, ctx)?;
        Ok(AppliedAction {
            action,
            duration,
            growth_after: report.growth,
        })
    }
}

// Compile-time assertion: TimingPolicy must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn TimingPolicy) {}
};
