//! The AND/OR assembly graph.
//!
//! OR-nodes are subassemblies waiting for one of several decomposition
//! actions; AND-nodes are the set of parts produced by one action, all of
//! which must be resolved. Edges leaving an OR-node carry the action key.

pub mod edge_data;
pub mod graph;
pub mod node_data;
pub mod problem;

pub use edge_data::{ActionKey, EdgeData};
pub use graph::AssemblyGraph;
pub use node_data::{Decision, InteractionChoice, NodeData, NodeKind, Scores, SearchStatus};
pub use problem::AssemblyProblem;
