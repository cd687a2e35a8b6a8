//! Plan Assembly use case
//!
//! Loads a problem, runs the AND/OR planner on it and reads the selected
//! plan back from the annotated graph.

use crate::config::PlannerParams;
use crate::ports::description_source::{DescriptionSource, DescriptionSourceError};
use crate::ports::progress::{NoProgress, PlanningProgressNotifier, ProgressObserver};
use assembly_domain::{AssemblyPlan, AssemblyProblem, Planner, PlanningError, SearchStats};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop the use case before a planning outcome exists
#[derive(Error, Debug)]
pub enum PlanAssemblyError {
    #[error(transparent)]
    Source(#[from] DescriptionSourceError),

    #[error("Planning failed: {0}")]
    Planning(PlanningError),
}

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlanOutcome {
    /// A minimum-cost plan was found
    Planned(AssemblyPlan),
    /// No feasible plan exists; `node` is where feasibility was lost
    Unsolvable { node: String },
}

impl PlanOutcome {
    pub fn plan(&self) -> Option<&AssemblyPlan> {
        match self {
            PlanOutcome::Planned(plan) => Some(plan),
            PlanOutcome::Unsolvable { .. } => None,
        }
    }

    pub fn is_planned(&self) -> bool {
        matches!(self, PlanOutcome::Planned(_))
    }
}

/// Output of the PlanAssembly use case
#[derive(Debug, Clone)]
pub struct PlanAssemblyOutput {
    /// The problem with its graph annotated by the planner
    pub problem: AssemblyProblem,
    pub outcome: PlanOutcome,
    /// Search counters; only present when a plan was found
    pub stats: Option<SearchStats>,
    pub planned_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl PlanAssemblyOutput {
    /// Serializable view for machine-readable output
    pub fn report(&self) -> PlanReport<'_> {
        PlanReport {
            root: &self.problem.root,
            outcome: &self.outcome,
            stats: self.stats.as_ref(),
            planned_at: self.planned_at,
            elapsed_ms: self.elapsed.as_millis(),
        }
    }
}

/// Machine-readable summary of a run
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub root: &'a str,
    pub outcome: &'a PlanOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<&'a SearchStats>,
    pub planned_at: DateTime<Utc>,
    pub elapsed_ms: u128,
}

/// Use case for computing a minimum-cost assembly plan
pub struct PlanAssemblyUseCase<S: DescriptionSource> {
    source: S,
}

impl<S: DescriptionSource> PlanAssemblyUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, params: &PlannerParams) -> Result<PlanAssemblyOutput, PlanAssemblyError> {
        self.execute_with_progress(params, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        params: &PlannerParams,
        progress: &dyn PlanningProgressNotifier,
    ) -> Result<PlanAssemblyOutput, PlanAssemblyError> {
        let mut problem = self.source.load()?;
        info!(
            root = %problem.root,
            nodes = problem.graph.number_of_nodes(),
            edges = problem.graph.number_of_edges(),
            "Planning assembly"
        );

        // memoized state from an earlier run would short-circuit the search
        problem.graph.reset_search();

        let started = Instant::now();
        progress.on_search_start(&problem.root, problem.graph.number_of_nodes());
        let planner = Planner::new(&problem.catalog).with_options(params.search_options());
        let observer = ProgressObserver::new(progress);
        let result = planner.plan_observed(&mut problem.graph, &problem.root, &observer);
        progress.on_search_complete(result.is_ok());
        let elapsed = started.elapsed();

        let (outcome, stats) = match result {
            Ok(stats) => {
                let plan = AssemblyPlan::from_graph(&problem.graph, &problem.root)
                    .map_err(PlanAssemblyError::Planning)?
                    .in_direction(params.direction);
                info!(
                    cost = stats.total_cost,
                    steps = plan.steps.len(),
                    expansions = stats.expansions,
                    memo_hits = stats.memo_hits,
                    "Plan found"
                );
                (PlanOutcome::Planned(plan), Some(stats))
            }
            Err(PlanningError::Unsolvable { node }) => {
                warn!(node = %node, "No feasible plan");
                (PlanOutcome::Unsolvable { node }, None)
            }
            Err(e) => {
                debug!("Planning aborted: {}", e);
                return Err(PlanAssemblyError::Planning(e));
            }
        };

        Ok(PlanAssemblyOutput {
            problem,
            outcome,
            stats,
            planned_at: Utc::now(),
            elapsed,
        })
    }
}
