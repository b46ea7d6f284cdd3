use crate::error::{ArrayError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    #[default]
    Exact,
    Geometric,
}

impl GrowthPolicy {
    /// Capacity to reserve so that `required` slots fit, or `None` if
    /// `current` already suffices.
    pub fn grow(self, current: usize, required: usize) -> Option<usize> {
        if required <= current {
            return None;
        }
        match self {
            GrowthPolicy::Exact => Some(required),
            GrowthPolicy::Geometric => Some(
                required
                    .max(2)
                    .checked_next_power_of_two()
                    .unwrap_or(required),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayConfig {
    pub growth: GrowthPolicy,
    pub initial_capacity: usize,
    pub max_slots: Option<usize>,
}

impl ArrayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn max_slots(mut self, limit: usize) -> Self {
        self.max_slots = Some(limit);
        self
    }

    pub fn check_slots(&self, requested: usize) -> Result<()> {
        match self.max_slots {
            Some(limit) if requested > limit => {
                Err(ArrayError::SlotLimitExceeded { requested, limit })
            }
            _ => Ok(()),
        }
    }
}
