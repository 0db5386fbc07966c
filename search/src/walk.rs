//! Shared plumbing for the strategies: input checks, dead-end mapping,
//! and the per-trial iteration counter.

use digen_kernel::carrier::digits::digit_len;
use digen_kernel::operators::rule::{
    expand_state, sample_state, RuleError, MAX_STATE, MIN_RULE_LEN,
};
use digen_kernel::rng::UniformSource;

use crate::error::SearchError;
use crate::policy::SearchPolicyV1;
use crate::strategy::Strategy;

/// Validate the policy and the endpoints before any work.
///
/// `start == target` is always accepted (every strategy answers `0`);
/// otherwise `start` needs at least two digits.
pub(crate) fn preflight(start: u64, target: u64, policy: &SearchPolicyV1) -> Result<(), SearchError> {
    policy.validate()?;
    for state in [start, target] {
        if state > MAX_STATE {
            return Err(RuleError::StateOutOfRange { state }.into());
        }
    }
    let len = digit_len(start);
    if start != target && len < MIN_RULE_LEN {
        return Err(RuleError::DegenerateLength { len }.into());
    }
    Ok(())
}

fn dead_end(strategy: Strategy, trial: usize, state: u64) -> impl FnOnce(RuleError) -> SearchError {
    move |e| match e {
        RuleError::DegenerateLength { .. } => SearchError::DeadEnd {
            strategy,
            trial,
            state,
        },
        other => SearchError::Rule(other),
    }
}

/// Full expansion of `state`, mapping a single-digit state to `DeadEnd`.
pub(crate) fn neighbors(strategy: Strategy, trial: usize, state: u64) -> Result<Vec<u64>, SearchError> {
    expand_state(state).map_err(dead_end(strategy, trial, state))
}

/// One sampled step from `state`, mapping a single-digit state to `DeadEnd`.
pub(crate) fn step(
    strategy: Strategy,
    trial: usize,
    state: u64,
    source: &mut dyn UniformSource,
) -> Result<u64, SearchError> {
    sample_state(state, source).map_err(dead_end(strategy, trial, state))
}

/// Iteration counter for one trial, enforcing `max_iterations`.
pub(crate) struct TrialCounter {
    strategy: Strategy,
    trial: Option<usize>,
    limit: u64,
    count: u64,
}

impl TrialCounter {
    pub(crate) fn new(strategy: Strategy, trial: Option<usize>, policy: &SearchPolicyV1) -> Self {
        Self {
            strategy,
            trial,
            limit: policy.max_iterations,
            count: 0,
        }
    }

    /// Start from a count already earned (parallel walk's implicit first level).
    pub(crate) fn starting_at(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub(crate) fn tick(&mut self) -> Result<(), SearchError> {
        if self.count >= self.limit {
            tracing::warn!(
                strategy = %self.strategy,
                trial = ?self.trial,
                limit = self.limit,
                "iteration budget exceeded"
            );
            return Err(SearchError::IterationBudgetExceeded {
                strategy: self.strategy,
                trial: self.trial,
                limit: self.limit,
            });
        }
        self.count += 1;
        Ok(())
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }
}
