//! A complete planning problem

use super::graph::AssemblyGraph;
use crate::catalog::Catalog;
use crate::graph::error::GraphError;

/// Graph, catalogs and root handed over by an input adapter
#[derive(Debug, Clone)]
pub struct AssemblyProblem {
    pub graph: AssemblyGraph,
    pub catalog: Catalog,
    pub root: String,
}

impl AssemblyProblem {
    /// Bundle a problem, checking that the root names an existing node.
    pub fn new(
        graph: AssemblyGraph,
        catalog: Catalog,
        root: impl Into<String>,
    ) -> Result<Self, GraphError> {
        let root = root.into();
        graph.lookup(&root)?;
        Ok(Self {
            graph,
            catalog,
            root,
        })
    }
}
