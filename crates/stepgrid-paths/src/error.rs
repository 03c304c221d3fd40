use std::fmt;

/// Why a [`PathSearch`](crate::PathSearch) returned no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Every reachable tile was expanded without reaching the goal.
    Unreachable,
    /// The node pool ran dry mid-search.
    BudgetExceeded { capacity: usize },
    /// The goal was found but the path is not shorter than `limit` steps.
    TooLong { limit: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => write!(f, "goal is unreachable"),
            Self::BudgetExceeded { capacity } => {
                write!(f, "search exceeded its budget of {capacity} nodes")
            }
            Self::TooLong { limit } => write!(f, "path needs {limit} or more steps"),
        }
    }
}

impl std::error::Error for PathError {}

/// Why a ring search returned no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlError {
    /// The minimum radius exceeds the (clamped) maximum radius.
    InvalidRadiusRange { min: u32, max: u32 },
    /// No tile in the searched rings satisfied the predicate.
    NotFound,
}

impl fmt::Display for CrawlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadiusRange { min, max } => {
                write!(f, "invalid radius range: min {min} > max {max}")
            }
            Self::NotFound => write!(f, "no matching position in range"),
        }
    }
}

impl std::error::Error for CrawlError {}
