//! Parallel walk: a population of searchers sharing one iteration counter.
//!
//! The population is seeded with the full expansion of `start` (one member
//! per split position), which already counts as one round. Each further
//! round advances every member by one sampled step, in member order, and
//! then checks the whole population for the target.
//!
//! The population is simulated on the calling thread; "parallel" refers to
//! the synchronized rounds, not to threads.

use digen_kernel::rng::UniformSource;

use crate::error::SearchError;
use crate::policy::SearchPolicyV1;
use crate::strategy::Strategy;
use crate::walk::{neighbors, preflight, step, TrialCounter};

/// Run `tests` independent population walks from `start` toward `target`.
///
/// Per trial:
/// - `start == target` records `0`
/// - `target` among the neighbors of `start` records `1`
/// - otherwise the count starts at `1` and grows by one per round
///
/// # Errors
///
/// Same as [`crate::depth::in_depth`]. A member stranding on a single-digit
/// state fails the trial with [`SearchError::DeadEnd`].
pub fn parallel(
    start: u64,
    target: u64,
    tests: usize,
    source: &mut dyn UniformSource,
    policy: &SearchPolicyV1,
) -> Result<Vec<u64>, SearchError> {
    let _span = tracing::info_span!("parallel", start, target, tests).entered();
    preflight(start, target, policy)?;

    (0..tests)
        .map(|trial| {
            let iterations = population_trial(start, target, trial, source, policy)?;
            tracing::debug!(trial, iterations, "trial finished");
            Ok(iterations)
        })
        .collect()
}

fn population_trial(
    start: u64,
    target: u64,
    trial: usize,
    source: &mut dyn UniformSource,
    policy: &SearchPolicyV1,
) -> Result<u64, SearchError> {
    if start == target {
        return Ok(0);
    }
    let mut population = neighbors(Strategy::Parallel, trial, start)?;
    if population.contains(&target) {
        return Ok(1);
    }

    let mut rounds = TrialCounter::new(Strategy::Parallel, Some(trial), policy).starting_at(1);
    loop {
        for member in &mut population {
            *member = step(Strategy::Parallel, trial, *member, source)?;
        }
        rounds.tick()?;
        if population.contains(&target) {
            return Ok(rounds.count());
        }
    }
}
