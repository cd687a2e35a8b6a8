//! Assembly-specific operations on the generic graph

use super::edge_data::EdgeData;
use super::node_data::{NodeData, NodeKind, SearchStatus};
use crate::graph::container::Graph;
use crate::graph::entities::{EdgeId, Node, NodeId};
use crate::graph::error::GraphError;

/// The AND/OR graph the planner works on
pub type AssemblyGraph = Graph<NodeData, EdgeData>;

impl Graph<NodeData, EdgeData> {
    pub fn insert_or(&mut self, name: impl Into<String>) -> Result<NodeId, GraphError> {
        self.insert_node(name, NodeData::or())
    }

    pub fn insert_and(&mut self, name: impl Into<String>) -> Result<NodeId, GraphError> {
        self.insert_node(name, NodeData::and())
    }

    /// Insert an edge tagged with an action key.
    pub fn insert_action_edge(
        &mut self,
        action: &str,
        from: &str,
        to: &str,
    ) -> Result<EdgeId, GraphError> {
        self.insert_edge(EdgeData::new(action), from, to)
    }

    /// A node is a goal when nothing it references can be decomposed further.
    pub fn is_goal(&self, id: NodeId) -> bool {
        self.successor_nodes(id).all(|n| n.is_terminal())
    }

    /// Drop every piece of state left by a previous planning run.
    pub fn reset_search(&mut self) {
        for node in self.nodes_mut() {
            node.data.reset();
        }
        for edge in self.edges_mut() {
            edge.data.solution = false;
        }
    }

    /// True when no node or edge carries state from an earlier run.
    pub fn is_pristine(&self) -> bool {
        self.nodes()
            .all(|n| n.data.status == SearchStatus::Unvisited && !n.data.solution)
            && self.edges().all(|e| !e.data.solution)
    }

    pub fn solution_nodes(&self) -> impl Iterator<Item = &Node<NodeData>> {
        self.nodes().filter(|n| n.data.solution)
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes().filter(|n| n.data.kind == kind).count()
    }
}
