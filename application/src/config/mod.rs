//! Application-level configuration.
//!
//! - [`PlannerParams`]: search strategy, heuristic, budget and plan direction

pub mod planner_params;

pub use planner_params::PlannerParams;
