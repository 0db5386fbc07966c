//! Level frontier for breadth search.
//!
//! Holds every state reachable in exactly `level` rule applications.
//! Duplicates are kept: a state reached along two paths appears twice, so
//! the frontier length is the product of `(L_k - 1)` across levels.

use digen_kernel::operators::rule::{expand_state, RuleError};

use crate::error::SearchError;

/// Breadth frontier with level and size accounting.
#[derive(Debug, Clone)]
pub struct LevelFrontier {
    states: Vec<u64>,
    level: u64,
    high_water: u64,
    generated: u64,
}

impl LevelFrontier {
    /// Level 0: just the start state.
    #[must_use]
    pub fn new(start: u64) -> Self {
        Self {
            states: vec![start],
            level: 0,
            high_water: 1,
            generated: 0,
        }
    }

    /// Replace the frontier with the concatenated expansions of its states.
    ///
    /// States with fewer than two digits contribute nothing. Expansion order
    /// is preserved: frontier order, then split position.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::FrontierBudgetExceeded`] as soon as the next
    /// level would hold more than `max_len` states.
    pub fn advance(&mut self, max_len: u64) -> Result<(), SearchError> {
        let next_level = self.level + 1;
        let mut next = Vec::new();
        for &state in &self.states {
            let neighbors = match expand_state(state) {
                Ok(n) => n,
                Err(RuleError::DegenerateLength { .. }) => continue,
                Err(e) => return Err(e.into()),
            };
            if (next.len() + neighbors.len()) as u64 > max_len {
                tracing::warn!(level = next_level, limit = max_len, "frontier budget exceeded");
                return Err(SearchError::FrontierBudgetExceeded {
                    level: next_level,
                    limit: max_len,
                });
            }
            next.extend(neighbors);
        }
        self.generated = self.generated.saturating_add(next.len() as u64);
        self.high_water = self.high_water.max(next.len() as u64);
        self.states = next;
        self.level = next_level;
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, state: u64) -> bool {
        self.states.contains(&state)
    }

    /// Number of rule applications behind the current states.
    #[must_use]
    pub fn level(&self) -> u64 {
        self.level
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn states(&self) -> &[u64] {
        &self.states
    }

    /// Largest level length seen so far.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total states produced by all expansions so far.
    #[must_use]
    pub fn generated(&self) -> u64 {
        self.generated
    }
}
