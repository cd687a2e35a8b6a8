//! Static problem configuration: actions, subassemblies and agents.
//!
//! The planner only reads from the catalog. Every list keeps insertion
//! order, which is the tie-breaking order of the search.

pub mod action;
pub mod agent;
pub mod cost;
pub mod registry;
pub mod subassembly;
pub mod validation;

pub use action::{Action, AgentCost};
pub use agent::Agent;
pub use cost::{INFEASIBLE_SENTINEL, is_feasible};
pub use registry::Catalog;
pub use subassembly::{Access, Reach, Subassembly};
pub use validation::{CatalogIssue, CatalogIssueCode, Severity, has_errors};
