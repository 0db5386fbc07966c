//! Strategy catalogue.

use std::fmt;

/// The four search strategies, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Breadth,
    Depth,
    Beam,
    Parallel,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Self::Breadth, Self::Depth, Self::Beam, Self::Parallel];

    /// Stable identifier, used as the artifact key and the tracing span name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breadth => "in_width",
            Self::Depth => "in_depth",
            Self::Beam => "by_beam",
            Self::Parallel => "parallel",
        }
    }

    /// Human-readable label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breadth => "Breadth search",
            Self::Depth => "Depth walk",
            Self::Beam => "Beam walk",
            Self::Parallel => "Parallel walk",
        }
    }

    /// Whether the strategy draws from a `UniformSource`.
    #[must_use]
    pub const fn is_stochastic(self) -> bool {
        !matches!(self, Self::Breadth)
    }

    /// Parse a stable identifier back into a strategy.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
