//! The catalog container

use super::action::Action;
use super::agent::Agent;
use super::subassembly::Subassembly;
use super::validation::{CatalogIssue, CatalogIssueCode, Severity};
use std::collections::HashMap;

/// Actions, subassemblies and agents of one planning problem.
///
/// Entries are kept in insertion order; inserting an existing name replaces
/// the entry in place and hands back the previous one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    actions: Vec<Action>,
    subassemblies: Vec<Subassembly>,
    agents: Vec<Agent>,
    action_index: HashMap<String, usize>,
    subassembly_index: HashMap<String, usize>,
    agent_index: HashMap<String, usize>,
}

fn upsert<T>(
    items: &mut Vec<T>,
    index: &mut HashMap<String, usize>,
    name: String,
    item: T,
) -> Option<T> {
    match index.get(&name) {
        Some(&i) => Some(std::mem::replace(&mut items[i], item)),
        None => {
            index.insert(name, items.len());
            items.push(item);
            None
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_action(&mut self, action: Action) -> Option<Action> {
        let name = action.name.as_str().to_string();
        upsert(&mut self.actions, &mut self.action_index, name, action)
    }

    pub fn insert_subassembly(&mut self, subassembly: Subassembly) -> Option<Subassembly> {
        let name = subassembly.name.clone();
        upsert(
            &mut self.subassemblies,
            &mut self.subassembly_index,
            name,
            subassembly,
        )
    }

    pub fn insert_agent(&mut self, agent: Agent) -> Option<Agent> {
        let name = agent.name.clone();
        upsert(&mut self.agents, &mut self.agent_index, name, agent)
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.insert_action(action);
        self
    }

    pub fn with_subassembly(mut self, subassembly: Subassembly) -> Self {
        self.insert_subassembly(subassembly);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.insert_agent(agent);
        self
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.action_index.get(name).map(|&i| &self.actions[i])
    }

    pub fn subassembly(&self, name: &str) -> Option<&Subassembly> {
        self.subassembly_index
            .get(name)
            .map(|&i| &self.subassemblies[i])
    }

    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agent_index.get(name).map(|&i| &self.agents[i])
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn subassemblies(&self) -> &[Subassembly] {
        &self.subassemblies
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Smallest feasible cost of any action for any agent.
    pub fn min_action_cost(&self) -> Option<f64> {
        self.actions
            .iter()
            .filter_map(|a| a.cheapest().map(|c| c.cost))
            .reduce(f64::min)
    }

    /// Check cross references between the catalogs.
    ///
    /// An interaction naming a missing action is an error. References to
    /// agents missing from the agent catalog are warnings, since planning
    /// only needs agent names.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for sub in &self.subassemblies {
            for reach in &sub.reachability {
                if let Some(interaction) = reach.interaction.as_deref() {
                    if !reach.reachable && !interaction.is_empty() && self.action(interaction).is_none()
                    {
                        issues.push(CatalogIssue {
                            severity: Severity::Error,
                            code: CatalogIssueCode::UnknownInteraction {
                                subassembly: sub.name.clone(),
                                agent: reach.agent.clone(),
                                interaction: interaction.to_string(),
                            },
                            message: format!(
                                "subassembly '{}': interaction '{}' for agent '{}' is not a known action",
                                sub.name, interaction, reach.agent
                            ),
                        });
                    }
                }
                if self.agent(&reach.agent).is_none() {
                    issues.push(Self::unknown_agent(&sub.name, &reach.agent));
                }
            }
        }

        for action in &self.actions {
            for cost in &action.costs {
                if self.agent(&cost.agent).is_none() {
                    issues.push(Self::unknown_agent(action.name.as_str(), &cost.agent));
                }
            }
            if !action.is_feasible() {
                issues.push(CatalogIssue {
                    severity: Severity::Warning,
                    code: CatalogIssueCode::InfeasibleAction {
                        action: action.name.as_str().to_string(),
                    },
                    message: format!("action '{}' cannot be performed by any agent", action.name),
                });
            }
        }

        issues
    }

    fn unknown_agent(entry: &str, agent: &str) -> CatalogIssue {
        CatalogIssue {
            severity: Severity::Warning,
            code: CatalogIssueCode::UnknownAgent {
                entry: entry.to_string(),
                agent: agent.to_string(),
            },
            message: format!("'{entry}' references agent '{agent}' which is not in the agent catalog"),
        }
    }
}
