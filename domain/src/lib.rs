//! Domain layer for assembly-planner
//!
//! This crate contains the AND/OR graph model, the static problem catalogs
//! and the planning engine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## AND/OR graph
//!
//! - **OR-node**: a subassembly; exactly one decomposition action is chosen
//! - **AND-node**: the parts produced by one action; all must be resolved
//! - **Terminal**: a node without successors, an indivisible part
//!
//! ## Catalog
//!
//! - **Action**: per-agent execution cost
//! - **Subassembly**: per-agent reachability, with an interaction action
//!   that unlocks an unreachable subassembly
//! - **Agent**: worker identity and dispatch address
//!
//! ## Planner
//!
//! Post-order cost propagation picks, at every OR-node, the cheapest
//! feasible (action, agent) pair including the cost of any interaction,
//! then marks the selected plan top-down.

pub mod assembly;
pub mod catalog;
pub mod config;
pub mod graph;
pub mod planning;

// Re-export commonly used types
pub use assembly::{
    ActionKey, AssemblyGraph, AssemblyProblem, Decision, EdgeData, InteractionChoice, NodeData,
    NodeKind, Scores, SearchStatus,
};
pub use catalog::{
    Access, Action, Agent, AgentCost, Catalog, CatalogIssue, CatalogIssueCode, Reach, Severity,
    Subassembly, has_errors, is_feasible,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, PlanDirection};
pub use graph::{
    container::Graph,
    entities::{Edge, EdgeId, Node, NodeId},
    error::GraphError,
};
pub use planning::{
    AssemblyPlan, Heuristic, NoopObserver, PlanStep, Planner, PlanningError, SearchBudget,
    SearchObserver, SearchOptions, SearchStats, SearchStrategy,
};
