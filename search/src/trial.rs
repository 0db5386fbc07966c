//! Trial batches: one iteration count per independent trial.

use crate::strategy::Strategy;

/// The per-trial iteration counts of one strategy, in trial order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialBatch {
    pub strategy: Strategy,
    pub iterations: Vec<u64>,
}

impl TrialBatch {
    #[must_use]
    pub fn new(strategy: Strategy, iterations: Vec<u64>) -> Self {
        Self {
            strategy,
            iterations,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.iterations
    }

    /// Largest trial count, `None` for an empty batch.
    #[must_use]
    pub fn max(&self) -> Option<u64> {
        self.iterations.iter().copied().max()
    }

    /// Sum of all trial counts, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.iterations
            .iter()
            .fold(0u64, |acc, &n| acc.saturating_add(n))
    }
}
