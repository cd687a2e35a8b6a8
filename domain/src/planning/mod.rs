//! AND/OR search for the minimum-cost decomposition.
//!
//! - [`planner::Planner`]: bottom-up cost propagation with memoization
//! - [`solution`]: top-down extraction of the selected plan
//! - [`options`]: strategy, heuristic and budget of a run
//! - [`observer::SearchObserver`]: hooks for progress reporting

pub mod error;
pub mod heuristic;
pub mod observer;
pub mod options;
pub mod planner;
pub mod solution;

pub use error::PlanningError;
pub use heuristic::Heuristic;
pub use observer::{NoopObserver, SearchObserver};
pub use options::{SearchBudget, SearchOptions, SearchStrategy};
pub use planner::{Planner, SearchStats};
pub use solution::{AssemblyPlan, PlanStep, mark_solution};
