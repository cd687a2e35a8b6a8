//! Graph elements

use serde::{Deserialize, Serialize};

/// Stable handle of a node inside a [`Graph`](super::container::Graph).
///
/// Handles are positions in an append-only arena, so inserting nodes never
/// invalidates an existing handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable handle of an edge inside a [`Graph`](super::container::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node with its payload and both adjacency lists.
///
/// Adjacency holds edge handles in insertion order; the graph owns the edges.
#[derive(Debug, Clone)]
pub struct Node<N> {
    pub id: NodeId,
    pub name: String,
    pub data: N,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) incoming: Vec<EdgeId>,
}

impl<N> Node<N> {
    pub(crate) fn new(id: NodeId, name: String, data: N) -> Self {
        Self {
            id,
            name,
            data,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn has_successor(&self) -> bool {
        !self.outgoing.is_empty()
    }

    pub fn has_predecessor(&self) -> bool {
        !self.incoming.is_empty()
    }

    pub fn number_of_successors(&self) -> usize {
        self.outgoing.len()
    }

    pub fn number_of_predecessors(&self) -> usize {
        self.incoming.len()
    }

    /// Outgoing edges in insertion order
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Incoming edges in insertion order
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// A node without successors cannot be decomposed any further.
    pub fn is_terminal(&self) -> bool {
        self.outgoing.is_empty()
    }
}

/// A directed edge carrying a payload.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    pub id: EdgeId,
    pub source: NodeId,
    pub destination: NodeId,
    pub data: E,
}
