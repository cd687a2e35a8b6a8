//! Planner parameters for the use case.
//!
//! [`PlannerParams`] groups the static parameters handed to
//! [`PlanAssemblyUseCase`](crate::use_cases::plan_assembly::PlanAssemblyUseCase).
//! They are assembled from the configuration file and CLI flags.

use assembly_domain::{Heuristic, PlanDirection, SearchBudget, SearchOptions, SearchStrategy};
use std::time::Duration;

/// Planning run parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerParams {
    pub strategy: SearchStrategy,
    pub heuristic: Heuristic,
    /// Upper bound on node expansions; `None` means unbounded.
    pub max_expansions: Option<usize>,
    /// Wall-clock limit for a single run.
    pub time_limit: Option<Duration>,
    /// Order in which plan steps are reported.
    pub direction: PlanDirection,
}

impl PlannerParams {
    // ==================== Builder Methods ====================

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, max: Option<usize>) -> Self {
        self.max_expansions = max;
        self
    }

    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_direction(mut self, direction: PlanDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Search options for the domain planner
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            strategy: self.strategy,
            heuristic: self.heuristic,
            budget: SearchBudget {
                max_expansions: self.max_expansions,
                time_limit: self.time_limit,
            },
        }
    }
}
