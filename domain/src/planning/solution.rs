//! Solution extraction and the resulting plan

use super::error::PlanningError;
use crate::assembly::{AssemblyGraph, InteractionChoice, NodeKind};
use crate::config::PlanDirection;
use crate::graph::entities::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mark the selected plan below a solved root.
///
/// Walks top-down, following only the chosen edge at OR-nodes and every
/// edge at AND-nodes. Returns the number of nodes marked.
pub fn mark_solution(graph: &mut AssemblyGraph, root: NodeId) -> Result<usize, PlanningError> {
    if !graph.node(root).data.is_solved() {
        return Err(PlanningError::NotSolved(graph.node(root).name.clone()));
    }

    let mut marked = 0;
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let node = graph.node_mut(id);
        if node.data.solution {
            continue;
        }
        node.data.solution = true;
        marked += 1;

        let chosen: Vec<EdgeId> = match (&node.data.decision, node.data.kind) {
            (Some(decision), _) => vec![decision.edge],
            (None, NodeKind::And) => node.outgoing().to_vec(),
            (None, NodeKind::Or) => Vec::new(),
        };
        for edge_id in chosen.into_iter().rev() {
            let edge = graph.edge_mut(edge_id);
            edge.data.solution = true;
            stack.push(edge.destination);
        }
    }
    Ok(marked)
}

/// One action of the selected plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Subassembly the action is applied to
    pub subassembly: String,
    pub action: String,
    pub agent: String,
    pub action_cost: f64,
    /// Interaction applied beforehand to make the subassembly reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionChoice>,
    /// Node produced by the action
    pub result: String,
    /// Solved cost of the subtree rooted at `subassembly`
    pub subtree_cost: f64,
}

impl PlanStep {
    /// Action cost plus interaction cost
    pub fn step_cost(&self) -> f64 {
        self.action_cost + self.interaction.as_ref().map_or(0.0, |i| i.cost)
    }
}

/// The minimum-cost plan read back from an annotated graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyPlan {
    pub root: String,
    pub total_cost: f64,
    pub direction: PlanDirection,
    pub steps: Vec<PlanStep>,
}

impl AssemblyPlan {
    /// Collect the steps of the marked solution, top-down.
    pub fn from_graph(graph: &AssemblyGraph, root: &str) -> Result<Self, PlanningError> {
        let root_id = graph
            .id_of(root)
            .ok_or_else(|| PlanningError::UnknownRoot(root.to_string()))?;
        let root_node = graph.node(root_id);
        if !root_node.data.solution {
            return Err(PlanningError::NotSolved(root.to_string()));
        }

        let mut steps = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![root_id];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let node = graph.node(id);
            if let Some(decision) = &node.data.decision {
                steps.push(PlanStep {
                    subassembly: node.name.clone(),
                    action: decision.action.as_str().to_string(),
                    agent: decision.agent.clone(),
                    action_cost: decision.action_cost,
                    interaction: decision.interaction.clone(),
                    result: graph.node(graph.edge(decision.edge).destination).name.clone(),
                    subtree_cost: node.data.cost,
                });
            }
            let next: Vec<NodeId> = graph
                .successors(id)
                .filter(|e| e.data.solution)
                .map(|e| e.destination)
                .collect();
            stack.extend(next.into_iter().rev());
        }

        Ok(Self {
            root: root.to_string(),
            total_cost: root_node.data.cost,
            direction: PlanDirection::Disassembly,
            steps,
        })
    }

    /// Order the steps for the given direction.
    ///
    /// Assembly is the disassembly sequence run backwards.
    pub fn in_direction(mut self, direction: PlanDirection) -> Self {
        if self.direction != direction {
            self.steps.reverse();
            self.direction = direction;
        }
        self
    }

    /// Agents used by the plan, in order of first appearance
    pub fn agents(&self) -> Vec<&str> {
        let mut agents: Vec<&str> = Vec::new();
        for step in &self.steps {
            let involved = step
                .interaction
                .as_ref()
                .map(|i| i.agent.as_str())
                .into_iter()
                .chain(std::iter::once(step.agent.as_str()));
            for agent in involved {
                if !agents.contains(&agent) {
                    agents.push(agent);
                }
            }
        }
        agents
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
