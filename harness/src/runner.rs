//! Harness runner: drives the four strategies over one seeded source.
//!
//! The runner uses ONLY `digen_search` entry points. It does not implement
//! any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! validate inputs → resolve policy → seed SeededSource
//!   → in_width() → in_depth() → by_beam() → parallel()
//!   → TrialReportV1
//! ```
//!
//! All stochastic strategies draw from the same source, in that order, so a
//! fixed seed reproduces every batch.

use digen_kernel::proof::canon::CanonError;
use digen_kernel::rng::SeededSource;
use digen_search::beam::by_beam;
use digen_search::breadth::in_width;
use digen_search::depth::in_depth;
use digen_search::error::SearchError;
use digen_search::parallel::parallel;
use digen_search::strategy::Strategy;
use digen_search::trial::TrialBatch;

use crate::config::{RunConfig, TrialInputs};
use crate::report::TrialReportV1;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Inputs rejected before any search ran.
    InvalidInput { detail: String },
    /// A strategy failed.
    Search(SearchError),
    /// The report could not be canonicalized for hashing.
    Canon(CanonError),
    /// Reading input or writing output failed.
    Io { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { detail } => write!(f, "invalid input: {detail}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Canon(e) => write!(f, "report: {e}"),
            Self::Io { detail } => write!(f, "I/O: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            detail: e.to_string(),
        }
    }
}

/// Run every strategy on `inputs` and collect the report.
///
/// Breadth search runs first unless `config.skip_breadth` is set, then the
/// depth, beam and parallel batches of `inputs.tests` trials each.
///
/// # Errors
///
/// - [`RunError::InvalidInput`] if `inputs.tests == 0`
/// - [`RunError::Search`] for the first strategy that fails
pub fn run_trials(inputs: &TrialInputs, config: &RunConfig) -> Result<TrialReportV1, RunError> {
    if inputs.tests == 0 {
        return Err(RunError::InvalidInput {
            detail: "the number of trials must be at least 1".to_string(),
        });
    }

    let policy = config.search_policy();
    let mut source = config
        .seed
        .map_or_else(SeededSource::from_entropy, SeededSource::new);
    let seed = source.seed();
    let TrialInputs {
        start,
        target,
        tests,
    } = *inputs;

    let _span = tracing::info_span!("run_trials", start, target, tests, seed).entered();

    let breadth = if config.skip_breadth {
        tracing::info!("breadth search skipped");
        None
    } else {
        Some(in_width(start, target, &policy)?)
    };

    let depth = in_depth(start, target, tests, &mut source, &policy)?;
    let beam = by_beam(start, target, tests, &mut source, &policy)?;
    let along = parallel(start, target, tests, &mut source, &policy)?;
    tracing::info!(draws = source.draws(), "all batches finished");

    Ok(TrialReportV1 {
        inputs: *inputs,
        seed,
        policy,
        breadth,
        batches: vec![
            TrialBatch::new(Strategy::Depth, depth),
            TrialBatch::new(Strategy::Beam, beam),
            TrialBatch::new(Strategy::Parallel, along),
        ],
    })
}
