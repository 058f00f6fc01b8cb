//! Built-in policies for the three supported species.

use super::{DurationTable, Species, TimingPolicy};

const CACTUS_DURATIONS: DurationTable = DurationTable::from_secs(2, 2, 2, 2);
const ROSE_DURATIONS: DurationTable = DurationTable::from_secs(3, 1, 5, 1);
const TOMATO_DURATIONS: DurationTable = DurationTable::from_secs(4, 3, 5, 3);

/// Cactus: every action takes the same short time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CactusPolicy;

impl TimingPolicy for CactusPolicy {
    fn species(&self) -> Species {
        Species::Cactus
    }

    fn durations(&self) -> &DurationTable {
        &CACTUS_DURATIONS
    }
}

/// Rose: quick feeding and sunlight, slow pest control.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosePolicy;

impl TimingPolicy for RosePolicy {
    fn species(&self) -> Species {
        Species::Rose
    }

    fn durations(&self) -> &DurationTable {
        &ROSE_DURATIONS
    }
}

/// Tomato: the slowest plant to tend.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomatoPolicy;

impl TimingPolicy for TomatoPolicy {
    fn species(&self) -> Species {
        Species::Tomato
    }

    fn durations(&self) -> &DurationTable {
        &TOMATO_DURATIONS
    }
}
