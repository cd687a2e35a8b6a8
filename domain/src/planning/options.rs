//! Search options

use super::heuristic::Heuristic;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Order in which the candidate actions of an OR-node are expanded.
///
/// The selected plan does not depend on the strategy; only the order of
/// expansion (and thus observer events and budget use) does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Post-order recursion over edges in insertion order
    #[default]
    Exhaustive,
    /// Candidates expanded by ascending `f = g + h`
    BestFirst,
}

impl std::str::FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exhaustive" => Ok(Self::Exhaustive),
            "best-first" | "bestfirst" | "best_first" => Ok(Self::BestFirst),
            other => Err(format!("unknown search strategy '{other}'")),
        }
    }
}

/// Limits on a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBudget {
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Everything that tunes a run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchOptions {
    pub strategy: SearchStrategy,
    pub heuristic: Heuristic,
    pub budget: SearchBudget,
}

impl SearchOptions {
    pub fn best_first(heuristic: Heuristic) -> Self {
        Self {
            strategy: SearchStrategy::BestFirst,
            heuristic,
            ..Default::default()
        }
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("exhaustive".parse(), Ok(SearchStrategy::Exhaustive));
        assert_eq!("Best-First".parse(), Ok(SearchStrategy::BestFirst));
        assert!("dijkstra".parse::<SearchStrategy>().is_err());
    }

    #[test]
    fn test_strategy_serde_kebab_case() {
        let json = serde_json::to_string(&SearchStrategy::BestFirst).unwrap();
        assert_eq!(json, "\"best-first\"");
    }
}
