//! Application layer for assembly-planner
//!
//! This crate contains the planning use case, port definitions, and
//! planner parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PlannerParams;
pub use ports::{
    description_source::{DescriptionSource, DescriptionSourceError, InMemorySource},
    progress::{NoProgress, PlanningProgressNotifier, ProgressObserver},
};
pub use use_cases::plan_assembly::{
    PlanAssemblyError, PlanAssemblyOutput, PlanAssemblyUseCase, PlanOutcome, PlanReport,
};
