//! Node payload of the assembly graph

use super::edge_data::ActionKey;
use crate::graph::entities::EdgeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AND/OR type of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    /// All successors must be resolved
    And,
    /// Exactly one outgoing action is chosen
    Or,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::And => write!(f, "AND"),
            NodeKind::Or => write!(f, "OR"),
        }
    }
}

/// Per-node search state.
///
/// Transitions move forward during a run:
/// `Unvisited -> InProgress -> Solved | Failed`. The only way back within a
/// run is for a result that went through a node still `InProgress`; it
/// returns to `Unvisited` so a later visit recomputes it. Otherwise going back
/// requires [`AssemblyGraph::reset_search`](super::AssemblyGraph::reset_search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Unvisited,
    /// On the current recursion stack
    InProgress,
    /// Minimum cost known and cached in [`NodeData::cost`]
    Solved,
    /// No feasible decomposition exists below this node
    Failed,
}

/// Best-first scores of a node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scores {
    /// Cost accumulated on the way to this node
    pub g: f64,
    /// Estimate of the remaining cost
    pub h: f64,
    pub f: f64,
}

impl Scores {
    pub fn new(g: f64, h: f64) -> Self {
        Self { g, h, f: g + h }
    }
}

/// Helper action applied first to make a subassembly reachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionChoice {
    pub action: ActionKey,
    pub agent: String,
    pub cost: f64,
}

/// Choice made at a solved OR-node.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub edge: EdgeId,
    pub action: ActionKey,
    pub agent: String,
    pub action_cost: f64,
    pub interaction: Option<InteractionChoice>,
}

impl Decision {
    /// Cost of the action plus any interaction needed before it
    pub fn step_cost(&self) -> f64 {
        self.action_cost + self.interaction.as_ref().map_or(0.0, |i| i.cost)
    }
}

/// Data attached to every node of the assembly graph
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Solved cost of the subtree rooted here
    pub cost: f64,
    pub status: SearchStatus,
    /// Set by solution extraction when the node lies on the selected plan
    pub solution: bool,
    pub scores: Scores,
    pub decision: Option<Decision>,
}

impl NodeData {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            cost: 0.0,
            status: SearchStatus::Unvisited,
            solution: false,
            scores: Scores::default(),
            decision: None,
        }
    }

    pub fn and() -> Self {
        Self::new(NodeKind::And)
    }

    pub fn or() -> Self {
        Self::new(NodeKind::Or)
    }

    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    /// Agent assigned to the chosen action, once solved
    pub fn worker(&self) -> Option<&str> {
        self.decision.as_ref().map(|d| d.agent.as_str())
    }

    /// Clear everything the planner writes.
    pub fn reset(&mut self) {
        self.cost = 0.0;
        self.status = SearchStatus::Unvisited;
        self.solution = false;
        self.scores = Scores::default();
        self.decision = None;
    }
}
