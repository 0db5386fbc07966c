//! Typed search errors.
//!
//! Reaching the target is never an error, and neither is an unreachable
//! target in breadth search (that is `BreadthResult::iterations == None`).
//! Errors cover bad inputs, walks that strand on a single-digit state, and
//! the budget caps from [`crate::policy::SearchPolicyV1`].

use digen_kernel::operators::rule::RuleError;

use crate::strategy::Strategy;

/// Typed failure for a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot run any search (zero budget).
    InvalidPolicy { detail: String },
    /// The start or target state is outside what the rule accepts.
    Rule(RuleError),
    /// A walk reached a state with fewer than two digits, which has no
    /// neighbors (e.g. `10 → 1`).
    DeadEnd {
        strategy: Strategy,
        trial: usize,
        state: u64,
    },
    /// A trial (or breadth search, `trial == None`) hit the iteration cap.
    IterationBudgetExceeded {
        strategy: Strategy,
        trial: Option<usize>,
        limit: u64,
    },
    /// The breadth frontier outgrew the frontier cap.
    FrontierBudgetExceeded { level: u64, limit: u64 },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::Rule(e) => write!(f, "{e}"),
            Self::DeadEnd {
                strategy,
                trial,
                state,
            } => write!(
                f,
                "{strategy} trial {trial} stranded on {state}: fewer than two digits"
            ),
            Self::IterationBudgetExceeded {
                strategy,
                trial: Some(trial),
                limit,
            } => write!(
                f,
                "{strategy} trial {trial} exceeded the iteration budget of {limit}"
            ),
            Self::IterationBudgetExceeded {
                strategy,
                trial: None,
                limit,
            } => write!(f, "{strategy} exceeded the iteration budget of {limit}"),
            Self::FrontierBudgetExceeded { level, limit } => write!(
                f,
                "breadth frontier at level {level} exceeded {limit} states"
            ),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuleError> for SearchError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}
