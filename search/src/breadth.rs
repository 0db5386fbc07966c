//! Breadth search: deterministic level-by-level expansion.

use crate::error::SearchError;
use crate::frontier::LevelFrontier;
use crate::policy::SearchPolicyV1;
use crate::strategy::Strategy;
use crate::walk::{preflight, TrialCounter};

/// Outcome of [`in_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreadthResult {
    /// Smallest `k` such that the target is in the level-`k` frontier.
    /// `None` when the frontier emptied before the target appeared.
    pub iterations: Option<u64>,
    /// Largest frontier level held during the search.
    pub frontier_high_water: u64,
    /// Total states produced across all levels.
    pub states_generated: u64,
}

impl BreadthResult {
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.iterations.is_some()
    }
}

/// Expand level by level until `target` appears in the frontier.
///
/// Returns `Some(0)` without expanding when `start == target`.
///
/// # Errors
///
/// - [`SearchError::Rule`] for out-of-range endpoints or a single-digit
///   `start` different from `target`
/// - [`SearchError::IterationBudgetExceeded`] after `max_iterations` levels
/// - [`SearchError::FrontierBudgetExceeded`] when a level outgrows
///   `max_frontier_len`
pub fn in_width(
    start: u64,
    target: u64,
    policy: &SearchPolicyV1,
) -> Result<BreadthResult, SearchError> {
    let _span = tracing::info_span!("in_width", start, target).entered();
    preflight(start, target, policy)?;

    let mut frontier = LevelFrontier::new(start);
    if start == target {
        return Ok(finish(&frontier, Some(0)));
    }

    let mut levels = TrialCounter::new(Strategy::Breadth, None, policy);
    loop {
        levels.tick()?;
        frontier.advance(policy.max_frontier_len)?;
        tracing::debug!(level = frontier.level(), len = frontier.len(), "level expanded");

        if frontier.contains(target) {
            return Ok(finish(&frontier, Some(levels.count())));
        }
        if frontier.is_empty() {
            tracing::debug!("frontier exhausted");
            return Ok(finish(&frontier, None));
        }
    }
}

fn finish(frontier: &LevelFrontier, iterations: Option<u64>) -> BreadthResult {
    BreadthResult {
        iterations,
        frontier_high_water: frontier.high_water(),
        states_generated: frontier.generated(),
    }
}
