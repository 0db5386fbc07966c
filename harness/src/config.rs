//! Run inputs and configuration.
//!
//! [`TrialInputs`] are the three numbers the study is about. [`RunConfig`]
//! carries everything else; each field is an optional override of a
//! default so that callers only name what they change.

use digen_search::policy::SearchPolicyV1;

/// The three integers every run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialInputs {
    pub start: u64,
    pub target: u64,
    pub tests: usize,
}

/// Overrides for a harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for the uniform source. `None` draws one from OS entropy; the
    /// chosen seed is recorded in the report either way.
    pub seed: Option<u64>,
    /// Per-trial iteration cap. `None` uses the search default.
    pub max_iterations: Option<u64>,
    /// Breadth frontier cap. `None` uses the search default.
    pub max_frontier_len: Option<u64>,
    /// Lift both caps. Explicit caps above still win.
    pub unbounded: bool,
    /// Skip breadth search (its frontier grows exponentially).
    pub skip_breadth: bool,
}

impl RunConfig {
    /// Resolve the overrides into a search policy.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicyV1 {
        let base = if self.unbounded {
            SearchPolicyV1::unbounded()
        } else {
            SearchPolicyV1::default()
        };
        SearchPolicyV1 {
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            max_frontier_len: self.max_frontier_len.unwrap_or(base.max_frontier_len),
        }
    }
}
