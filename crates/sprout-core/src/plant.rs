//! Growth model for a single plant.

/// Percentage points added by every call to [`Plant::grow`].
pub const GROWTH_STEP: u32 = 10;

/// Growth percentage at which a plant counts as fully grown.
pub const COMPLETION_THRESHOLD: u32 = 100;

/// A plant and its cumulative growth percentage.
///
/// Growth only ever increases and is not capped at
/// [`COMPLETION_THRESHOLD`]; care can continue past full growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    name: String,
    growth: u32,
}

/// Outcome of a single [`Plant::grow`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthReport {
    /// Growth percentage after the increment.
    pub growth: u32,
    /// `true` whenever `growth` is at or above the completion threshold.
    pub completed: bool,
}

impl Plant {
    /// Create a plant with zero growth.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            growth: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn growth(&self) -> u32 {
        self.growth
    }

    pub fn is_fully_grown(&self) -> bool {
        self.growth >= COMPLETION_THRESHOLD
    }

    /// Add [`GROWTH_STEP`] to the growth counter.
    pub fn grow(&mut self) -> GrowthReport {
        self.growth = self.growth.saturating_add(GROWTH_STEP);
        tracing::debug!(plant = %self.name, growth = self.growth, "plant grew");
        GrowthReport {
            growth: self.growth,
            completed: self.is_fully_grown(),
        }
    }
}
