//! Depth walk: a random walk that looks one full expansion ahead.

use digen_kernel::rng::UniformSource;

use crate::error::SearchError;
use crate::policy::SearchPolicyV1;
use crate::strategy::Strategy;
use crate::walk::{neighbors, preflight, TrialCounter};

/// Run `tests` independent depth walks from `start` toward `target`.
///
/// Each step expands the current state and counts one iteration. If the
/// target is among the neighbors the trial ends (the discovering step
/// counts); otherwise the walk moves to a uniformly drawn neighbor.
/// A trial with `start == target` records `0`.
///
/// # Errors
///
/// - [`SearchError::Rule`] for out-of-range endpoints or a single-digit
///   `start` different from `target`
/// - [`SearchError::DeadEnd`] when a walk lands on a single-digit state
/// - [`SearchError::IterationBudgetExceeded`] when a trial passes
///   `max_iterations`
pub fn in_depth(
    start: u64,
    target: u64,
    tests: usize,
    source: &mut dyn UniformSource,
    policy: &SearchPolicyV1,
) -> Result<Vec<u64>, SearchError> {
    let _span = tracing::info_span!("in_depth", start, target, tests).entered();
    preflight(start, target, policy)?;

    (0..tests)
        .map(|trial| {
            let iterations = depth_trial(start, target, trial, source, policy)?;
            tracing::debug!(trial, iterations, "trial finished");
            Ok(iterations)
        })
        .collect()
}

fn depth_trial(
    start: u64,
    target: u64,
    trial: usize,
    source: &mut dyn UniformSource,
    policy: &SearchPolicyV1,
) -> Result<u64, SearchError> {
    if start == target {
        return Ok(0);
    }
    let mut counter = TrialCounter::new(Strategy::Depth, Some(trial), policy);
    let mut current = start;
    loop {
        let expansion = neighbors(Strategy::Depth, trial, current)?;
        counter.tick()?;
        if expansion.contains(&target) {
            return Ok(counter.count());
        }
        current = expansion[source.below(expansion.len())];
    }
}
