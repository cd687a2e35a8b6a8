//! Action catalog entries

use super::cost::is_feasible;
use crate::assembly::ActionKey;
use serde::{Deserialize, Serialize};

/// Cost for one agent to perform an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCost {
    pub agent: String,
    pub cost: f64,
}

/// A named operation with per-agent execution cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: ActionKey,
    pub costs: Vec<AgentCost>,
}

impl Action {
    pub fn new(name: impl Into<ActionKey>) -> Self {
        Self {
            name: name.into(),
            costs: Vec::new(),
        }
    }

    /// Set the cost for an agent, replacing an earlier entry in place.
    pub fn with_cost(mut self, agent: impl Into<String>, cost: f64) -> Self {
        self.set_cost(agent, cost);
        self
    }

    pub fn set_cost(&mut self, agent: impl Into<String>, cost: f64) {
        let agent = agent.into();
        match self.costs.iter_mut().find(|c| c.agent == agent) {
            Some(entry) => entry.cost = cost,
            None => self.costs.push(AgentCost { agent, cost }),
        }
    }

    /// Cost for `agent`, or `None` if the agent cannot perform the action.
    pub fn cost_for(&self, agent: &str) -> Option<f64> {
        self.costs
            .iter()
            .find(|c| c.agent == agent)
            .map(|c| c.cost)
            .filter(|c| is_feasible(*c))
    }

    /// Agents able to perform the action, in catalog order.
    pub fn feasible_costs(&self) -> impl Iterator<Item = &AgentCost> {
        self.costs.iter().filter(|c| is_feasible(c.cost))
    }

    /// Cheapest feasible agent; the first one listed wins a tie.
    pub fn cheapest(&self) -> Option<&AgentCost> {
        self.feasible_costs().fold(None, |best: Option<&AgentCost>, c| match best {
            Some(b) if b.cost <= c.cost => Some(b),
            _ => Some(c),
        })
    }

    pub fn is_feasible(&self) -> bool {
        self.feasible_costs().next().is_some()
    }
}
