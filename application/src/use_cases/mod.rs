//! Use cases of the planner application.

pub mod plan_assembly;
