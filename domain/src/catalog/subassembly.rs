//! Subassembly catalog entries

use serde::{Deserialize, Serialize};

/// Reachability of a subassembly for one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reach {
    pub agent: String,
    pub reachable: bool,
    /// Action that makes the subassembly reachable when `reachable` is false
    pub interaction: Option<String>,
}

/// How an agent may get at a subassembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    Direct,
    /// Only after the named interaction action has been applied
    Interaction(&'a str),
    /// Unreachable and no interaction is declared
    Blocked,
}

/// A subassembly with per-agent reachability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subassembly {
    pub name: String,
    pub reachability: Vec<Reach>,
}

impl Subassembly {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reachability: Vec::new(),
        }
    }

    pub fn reachable_by(mut self, agent: impl Into<String>) -> Self {
        self.set_reach(Reach {
            agent: agent.into(),
            reachable: true,
            interaction: None,
        });
        self
    }

    pub fn unreachable_by(mut self, agent: impl Into<String>, interaction: impl Into<String>) -> Self {
        self.set_reach(Reach {
            agent: agent.into(),
            reachable: false,
            interaction: Some(interaction.into()),
        });
        self
    }

    /// Add or replace the entry for `reach.agent`.
    pub fn set_reach(&mut self, reach: Reach) {
        match self.reachability.iter_mut().find(|r| r.agent == reach.agent) {
            Some(entry) => *entry = reach,
            None => self.reachability.push(reach),
        }
    }

    pub fn reach_for(&self, agent: &str) -> Option<&Reach> {
        self.reachability.iter().find(|r| r.agent == agent)
    }

    /// Agents without an entry are not restricted.
    pub fn access_for(&self, agent: &str) -> Access<'_> {
        match self.reach_for(agent) {
            None => Access::Direct,
            Some(r) if r.reachable => Access::Direct,
            Some(r) => match r.interaction.as_deref() {
                Some(name) if !name.is_empty() => Access::Interaction(name),
                _ => Access::Blocked,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_for() {
        let sub = Subassembly::new("P")
            .reachable_by("x")
            .unreachable_by("y", "unlock");

        assert_eq!(sub.access_for("x"), Access::Direct);
        assert_eq!(sub.access_for("y"), Access::Interaction("unlock"));
        assert_eq!(sub.access_for("unknown"), Access::Direct);
    }

    #[test]
    fn test_unreachable_without_interaction_is_blocked() {
        let mut sub = Subassembly::new("P");
        sub.set_reach(Reach {
            agent: "x".to_string(),
            reachable: false,
            interaction: None,
        });

        assert_eq!(sub.access_for("x"), Access::Blocked);
    }
}
