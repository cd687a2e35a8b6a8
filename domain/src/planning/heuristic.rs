//! Remaining-work estimates for best-first expansion

use crate::assembly::AssemblyGraph;
use crate::graph::entities::NodeId;
use serde::{Deserialize, Serialize};

/// Estimate of the cost left below a node.
///
/// Only the expansion order depends on it; costs are always recomputed
/// exactly bottom-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Always zero
    #[default]
    None,
    /// `log2(longest successor name) * cheapest action cost`
    NameLength,
}

impl Heuristic {
    pub fn estimate(&self, graph: &AssemblyGraph, id: NodeId, min_action_cost: f64) -> f64 {
        match self {
            Heuristic::None => 0.0,
            Heuristic::NameLength => {
                let longest = graph
                    .successor_nodes(id)
                    .map(|n| n.name.chars().count())
                    .max()
                    .unwrap_or(0);
                if longest == 0 {
                    0.0
                } else {
                    (longest as f64).log2() * min_action_cost
                }
            }
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "name-length" | "name_length" => Ok(Self::NameLength),
            other => Err(format!("unknown heuristic '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_estimate() {
        let mut graph = AssemblyGraph::new();
        graph.insert_or("root").unwrap();
        graph.insert_and("ABCD").unwrap();
        graph.insert_and("AB").unwrap();
        graph.insert_action_edge("a1", "root", "ABCD").unwrap();
        graph.insert_action_edge("a2", "root", "AB").unwrap();
        let root = graph.lookup("root").unwrap();
        let leaf = graph.lookup("AB").unwrap();

        assert_eq!(Heuristic::NameLength.estimate(&graph, root, 3.0), 6.0);
        assert_eq!(Heuristic::NameLength.estimate(&graph, leaf, 3.0), 0.0);
        assert_eq!(Heuristic::None.estimate(&graph, root, 3.0), 0.0);
    }
}
