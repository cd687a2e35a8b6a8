//! Generic directed graph container.
//!
//! - [`container::Graph`]: append-only arena of nodes and edges, keyed by node name
//! - [`entities::Node`] / [`entities::Edge`]: stored elements with adjacency lists
//! - [`error::GraphError`]: structural errors raised while building or querying

pub mod container;
pub mod entities;
pub mod error;
