//! Append-only directed graph keyed by node name
//!
//! Nodes and edges live in arenas owned by the graph. Adjacency is stored as
//! lists of [`EdgeId`] on each node, so both directions can be walked without
//! any node owning another.

use super::entities::{Edge, EdgeId, Node, NodeId};
use super::error::GraphError;
use std::collections::HashMap;

/// Directed graph with per-node payload `N` and per-edge payload `E`.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
    index: HashMap<String, NodeId>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a graph with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    // ==================== Insertion ====================

    /// Insert a node under a unique name.
    pub fn insert_node(&mut self, name: impl Into<String>, data: N) -> Result<NodeId, GraphError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(name.clone(), id);
        self.nodes.push(Node::new(id, name, data));
        Ok(id)
    }

    /// Insert an edge between two existing nodes.
    ///
    /// Both endpoints are checked before anything is mutated, so a failed
    /// insertion leaves the graph untouched.
    pub fn insert_edge(&mut self, data: E, from: &str, to: &str) -> Result<EdgeId, GraphError> {
        let missing = |name: &str| GraphError::MissingEndpoint {
            from: from.to_string(),
            to: to.to_string(),
            missing: name.to_string(),
        };
        let source = self.id_of(from).ok_or_else(|| missing(from))?;
        let destination = self.id_of(to).ok_or_else(|| missing(to))?;

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            source,
            destination,
            data,
        });
        self.nodes[source.0].outgoing.push(id);
        self.nodes[destination.0].incoming.push(id);
        Ok(id)
    }

    /// Insert one edge per destination, all sharing the same payload.
    ///
    /// A failing destination does not abort the batch; every destination gets
    /// its own result, in input order.
    pub fn insert_edges<S: AsRef<str>>(
        &mut self,
        data: E,
        from: &str,
        destinations: &[S],
    ) -> Vec<Result<EdgeId, GraphError>>
    where
        E: Clone,
    {
        destinations
            .iter()
            .map(|to| self.insert_edge(data.clone(), from, to.as_ref()))
            .collect()
    }

    // ==================== Lookup ====================

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Resolve a name, failing with [`GraphError::UnknownNode`].
    pub fn lookup(&self, name: &str) -> Result<NodeId, GraphError> {
        self.id_of(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node(&self, id: NodeId) -> &Node<N> {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<N> {
        &mut self.nodes[id.0]
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node<N>> {
        self.id_of(name).map(|id| self.node(id))
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<E> {
        &self.edges[id.0]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge<E> {
        &mut self.edges[id.0]
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node<N>> {
        self.nodes.iter_mut()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.edges.iter()
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge<E>> {
        self.edges.iter_mut()
    }

    // ==================== Adjacency queries ====================

    /// Number of edges leaving the named node.
    pub fn number_of_edges_from(&self, name: &str) -> Result<usize, GraphError> {
        Ok(self.node(self.lookup(name)?).outgoing.len())
    }

    /// Number of edges entering the named node.
    pub fn number_of_edges_to(&self, name: &str) -> Result<usize, GraphError> {
        Ok(self.node(self.lookup(name)?).incoming.len())
    }

    /// The `j`-th edge leaving the named node.
    pub fn edge_from(&self, name: &str, j: usize) -> Result<&Edge<E>, GraphError> {
        let node = self.node(self.lookup(name)?);
        let id = Self::nth(name, &node.outgoing, j)?;
        Ok(self.edge(id))
    }

    /// The `j`-th edge entering the named node.
    pub fn edge_to(&self, name: &str, j: usize) -> Result<&Edge<E>, GraphError> {
        let node = self.node(self.lookup(name)?);
        let id = Self::nth(name, &node.incoming, j)?;
        Ok(self.edge(id))
    }

    /// The node reached through the `j`-th edge leaving the named node.
    pub fn node_from(&self, name: &str, j: usize) -> Result<&Node<N>, GraphError> {
        let edge = self.edge_from(name, j)?;
        Ok(self.node(edge.destination))
    }

    /// The node incident through the `j`-th edge entering the named node.
    pub fn node_to(&self, name: &str, j: usize) -> Result<&Node<N>, GraphError> {
        let edge = self.edge_to(name, j)?;
        Ok(self.node(edge.source))
    }

    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = &Edge<E>> {
        self.node(id).outgoing.iter().map(|e| self.edge(*e))
    }

    pub fn predecessors(&self, id: NodeId) -> impl Iterator<Item = &Edge<E>> {
        self.node(id).incoming.iter().map(|e| self.edge(*e))
    }

    pub fn successor_nodes(&self, id: NodeId) -> impl Iterator<Item = &Node<N>> {
        self.successors(id).map(|e| self.node(e.destination))
    }

    pub fn predecessor_nodes(&self, id: NodeId) -> impl Iterator<Item = &Node<N>> {
        self.predecessors(id).map(|e| self.node(e.source))
    }

    fn nth(name: &str, edges: &[EdgeId], j: usize) -> Result<EdgeId, GraphError> {
        edges
            .get(j)
            .copied()
            .ok_or_else(|| GraphError::IndexOutOfBounds {
                node: name.to_string(),
                index: j,
                len: edges.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<(), &'static str> {
        let mut graph = Graph::new();
        for name in ["a", "b", "c", "d"] {
            graph.insert_node(name, ()).unwrap();
        }
        graph.insert_edge("ab", "a", "b").unwrap();
        graph.insert_edge("ac", "a", "c").unwrap();
        graph.insert_edge("bd", "b", "d").unwrap();
        graph.insert_edge("cd", "c", "d").unwrap();
        graph
    }

    #[test]
    fn test_insert_node_returns_stable_ids() {
        let mut graph: Graph<u32, ()> = Graph::new();
        let a = graph.insert_node("a", 1).unwrap();
        let b = graph.insert_node("b", 2).unwrap();
        graph.insert_node("c", 3).unwrap();

        assert_eq!(graph.id_of("a"), Some(a));
        assert_eq!(graph.id_of("b"), Some(b));
        assert_eq!(graph.node(b).data, 2);
        assert_eq!(graph.number_of_nodes(), 3);
    }

    #[test]
    fn test_duplicate_node_is_rejected() {
        let mut graph: Graph<u32, ()> = Graph::new();
        graph.insert_node("a", 1).unwrap();

        let err = graph.insert_node("a", 2).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("a".to_string()));
        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.node_by_name("a").unwrap().data, 1);
    }

    #[test]
    fn test_insert_edge_registers_both_directions() {
        let graph = diamond();

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.number_of_edges_from("a").unwrap(), 2);
        assert_eq!(graph.number_of_edges_to("d").unwrap(), 2);
        assert_eq!(graph.node_from("a", 1).unwrap().name, "c");
        assert_eq!(graph.node_to("d", 0).unwrap().name, "b");
        assert_eq!(graph.edge_from("b", 0).unwrap().data, "bd");
        assert_eq!(graph.edge_to("c", 0).unwrap().data, "ac");
    }

    #[test]
    fn test_missing_endpoint_leaves_graph_untouched() {
        let mut graph = diamond();

        let err = graph.insert_edge("ax", "a", "x").unwrap_err();
        assert_eq!(
            err,
            GraphError::MissingEndpoint {
                from: "a".to_string(),
                to: "x".to_string(),
                missing: "x".to_string(),
            }
        );
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.number_of_edges_from("a").unwrap(), 2);

        let err = graph.insert_edge("xa", "x", "a").unwrap_err();
        assert!(matches!(err, GraphError::MissingEndpoint { missing, .. } if missing == "x"));
    }

    #[test]
    fn test_insert_edges_reports_per_destination() {
        let mut graph = diamond();

        let results = graph.insert_edges("fan", "a", &["b", "missing", "d"]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
        assert_eq!(graph.number_of_edges_from("a").unwrap(), 4);
    }

    #[test]
    fn test_out_of_range_access_fails() {
        let graph = diamond();

        let err = graph.edge_from("d", 0).unwrap_err();
        assert_eq!(
            err,
            GraphError::IndexOutOfBounds {
                node: "d".to_string(),
                index: 0,
                len: 0,
            }
        );
        assert!(graph.node_to("a", 3).is_err());
        assert!(matches!(
            graph.number_of_edges_from("zzz"),
            Err(GraphError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_successor_and_predecessor_iteration_order() {
        let graph = diamond();
        let a = graph.lookup("a").unwrap();
        let d = graph.lookup("d").unwrap();

        let succ: Vec<_> = graph.successor_nodes(a).map(|n| n.name.as_str()).collect();
        assert_eq!(succ, vec!["b", "c"]);

        let pred: Vec<_> = graph.predecessor_nodes(d).map(|n| n.name.as_str()).collect();
        assert_eq!(pred, vec!["b", "c"]);

        assert!(graph.node(d).is_terminal());
        assert!(!graph.node(a).has_predecessor());
    }
}
