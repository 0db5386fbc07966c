//! Beam walk: a random walk over single sampled steps.

use digen_kernel::rng::UniformSource;

use crate::error::SearchError;
use crate::policy::SearchPolicyV1;
use crate::strategy::Strategy;
use crate::walk::{preflight, step, TrialCounter};

/// Run `tests` independent beam walks from `start` toward `target`.
///
/// Each step replaces the current state with one sampled neighbor and counts
/// one iteration; the trial ends when that neighbor equals `target`.
/// A trial with `start == target` records `0` and takes no step.
///
/// # Errors
///
/// Same as [`crate::depth::in_depth`].
pub fn by_beam(
    start: u64,
    target: u64,
    tests: usize,
    source: &mut dyn UniformSource,
    policy: &SearchPolicyV1,
) -> Result<Vec<u64>, SearchError> {
    let _span = tracing::info_span!("by_beam", start, target, tests).entered();
    preflight(start, target, policy)?;

    (0..tests)
        .map(|trial| {
            let iterations = beam_trial(start, target, trial, source, policy)?;
            tracing::debug!(trial, iterations, "trial finished");
            Ok(iterations)
        })
        .collect()
}

fn beam_trial(
    start: u64,
    target: u64,
    trial: usize,
    source: &mut dyn UniformSource,
    policy: &SearchPolicyV1,
) -> Result<u64, SearchError> {
    if start == target {
        return Ok(0);
    }
    let mut counter = TrialCounter::new(Strategy::Beam, Some(trial), policy);
    let mut current = start;
    loop {
        current = step(Strategy::Beam, trial, current, source)?;
        counter.tick()?;
        if current == target {
            return Ok(counter.count());
        }
    }
}
