//! Planning errors

use thiserror::Error;

/// Errors and negative outcomes of a planning run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    #[error("Root node '{0}' not in graph")]
    UnknownRoot(String),

    /// No feasible (agent, action) pair exists; a normal negative outcome.
    #[error("No feasible plan: node '{node}' cannot be resolved")]
    Unsolvable { node: String },

    #[error("Search budget exhausted after {expansions} expansions")]
    BudgetExhausted { expansions: usize },

    #[error("Search time limit of {limit_ms} ms exceeded")]
    TimeLimitExceeded { limit_ms: u128 },

    #[error("Graph carries state from a previous run; reset it before planning")]
    StaleSearchState,

    #[error("Node '{0}' has not been solved")]
    NotSolved(String),
}

impl PlanningError {
    /// Check if this error is the regular "no plan exists" outcome
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, PlanningError::Unsolvable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsolvable_display() {
        let error = PlanningError::Unsolvable {
            node: "P".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No feasible plan: node 'P' cannot be resolved"
        );
        assert!(error.is_unsolvable());
        assert!(!PlanningError::StaleSearchState.is_unsolvable());
    }
}
