//! Search policy types.

use crate::error::SearchError;

/// Default cap on iterations per trial (and on breadth levels).
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

/// Default cap on the breadth frontier length.
pub const DEFAULT_MAX_FRONTIER_LEN: u64 = 4_000_000;

/// Budgets that bound every search call.
///
/// Neither breadth search nor the walks terminate on their own when the
/// target is unreachable. The caps turn that into an explicit error.
/// [`SearchPolicyV1::unbounded`] lifts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Maximum iterations a single trial may record. For breadth search,
    /// the maximum number of levels.
    pub max_iterations: u64,
    /// Maximum number of states held in one breadth frontier level.
    pub max_frontier_len: u64,
}

impl SearchPolicyV1 {
    /// No caps: searches run until they find the target.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_iterations: u64::MAX,
            max_frontier_len: u64::MAX,
        }
    }

    /// Reject budgets that could never admit a single step.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if either budget is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        if self.max_frontier_len == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_len must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_frontier_len: DEFAULT_MAX_FRONTIER_LEN,
        }
    }
}
