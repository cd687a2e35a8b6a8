//! Structural graph errors

use thiserror::Error;

/// Errors raised while building or querying a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node '{0}' already exists in the graph")]
    DuplicateNode(String),

    #[error("Unable to create edge {from} -> {to}: node '{missing}' not in graph")]
    MissingEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Node '{0}' not in graph")]
    UnknownNode(String),

    #[error("Edge index {index} out of range for node '{node}' ({len} edges)")]
    IndexOutOfBounds {
        node: String,
        index: usize,
        len: usize,
    },
}
