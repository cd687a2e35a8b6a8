//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod output_format;
mod plan_direction;
mod validation;

pub use output_format::OutputFormat;
pub use plan_direction::PlanDirection;
pub use validation::{ConfigIssue, ConfigIssueCode};
