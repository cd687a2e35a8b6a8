//! Bottom-up cost propagation over the AND/OR graph
//!
//! The search is a post-order recursion. OR-nodes take the cheapest feasible
//! (action, agent) pair over their outgoing edges, AND-nodes sum their
//! children, terminals cost nothing. `Solved` and `Failed` results are
//! memoized on the node, and meeting a node that is still `InProgress` marks
//! the candidate as cyclic.
//!
//! A result that relied on such a cut is only valid while the node that was
//! cut is still open. It is cached once the search unwinds to that node;
//! anything below it is returned to `Unvisited` and recomputed on its next
//! visit.

use super::error::PlanningError;
use super::observer::{NoopObserver, SearchObserver};
use super::options::{SearchOptions, SearchStrategy};
use super::solution::mark_solution;
use crate::assembly::{
    ActionKey, AssemblyGraph, Decision, InteractionChoice, NodeKind, Scores, SearchStatus,
};
use crate::catalog::{Access, Catalog};
use crate::graph::entities::{EdgeId, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

/// Counters of one planning run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SearchStats {
    pub total_cost: f64,
    /// Node expansions, including recomputed cycle-dependent nodes
    pub expansions: usize,
    /// Times a solved node was reused instead of recomputed
    pub memo_hits: usize,
    /// Nodes marked as part of the selected plan
    pub solution_nodes: usize,
}

/// The AND/OR planner.
///
/// Reads the catalog, writes search state into the graph. A graph must be
/// reset with [`AssemblyGraph::reset_search`] between runs.
pub struct Planner<'c> {
    catalog: &'c Catalog,
    options: SearchOptions,
}

impl<'c> Planner<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Solve the graph from `root` and mark the selected plan.
    pub fn plan(&self, graph: &mut AssemblyGraph, root: &str) -> Result<SearchStats, PlanningError> {
        self.plan_observed(graph, root, &NoopObserver)
    }

    /// Like [`plan`](Self::plan), reporting progress to `observer`.
    pub fn plan_observed(
        &self,
        graph: &mut AssemblyGraph,
        root: &str,
        observer: &dyn SearchObserver,
    ) -> Result<SearchStats, PlanningError> {
        let root_id = graph
            .id_of(root)
            .ok_or_else(|| PlanningError::UnknownRoot(root.to_string()))?;
        if !graph.is_pristine() {
            return Err(PlanningError::StaleSearchState);
        }

        let mut search = Search::new(self.catalog, self.options, observer);
        match search.resolve(graph, root_id, 0.0)? {
            Resolution::Solved(total_cost) => {
                let solution_nodes = mark_solution(graph, root_id)?;
                Ok(SearchStats {
                    total_cost,
                    expansions: search.expansions,
                    memo_hits: search.memo_hits,
                    solution_nodes,
                })
            }
            Resolution::Failed(origin) => {
                let origin = if graph.node(origin).data.is_solved() {
                    root_id
                } else {
                    origin
                };
                Err(PlanningError::Unsolvable {
                    node: graph.node(origin).name.clone(),
                })
            }
        }
    }
}

/// Outcome of resolving one node
#[derive(Debug, Clone, Copy)]
enum Resolution {
    Solved(f64),
    /// Carries the node where feasibility was lost
    Failed(NodeId),
}

/// A feasible (action, agent) pair at an OR-node
struct Candidate {
    /// (edge position, agent position) in catalog order
    rank: (usize, usize),
    total: f64,
    decision: Decision,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        self.total < other.total || (self.total == other.total && self.rank < other.rank)
    }
}

/// State of one run
struct Search<'a> {
    catalog: &'a Catalog,
    options: SearchOptions,
    observer: &'a dyn SearchObserver,
    min_action_cost: f64,
    started: Instant,
    expansions: usize,
    memo_hits: usize,
    failures: HashMap<NodeId, NodeId>,
    /// Recursion depth of every `InProgress` node
    on_stack: HashMap<NodeId, usize>,
    /// Shallowest stack depth a result in the current subtree was cut at
    cut: Option<usize>,
}

impl<'a> Search<'a> {
    fn new(catalog: &'a Catalog, options: SearchOptions, observer: &'a dyn SearchObserver) -> Self {
        Self {
            catalog,
            options,
            observer,
            min_action_cost: catalog.min_action_cost().unwrap_or(0.0),
            started: Instant::now(),
            expansions: 0,
            memo_hits: 0,
            failures: HashMap::new(),
            on_stack: HashMap::new(),
            cut: None,
        }
    }

    fn resolve(
        &mut self,
        graph: &mut AssemblyGraph,
        id: NodeId,
        g: f64,
    ) -> Result<Resolution, PlanningError> {
        let node = graph.node(id);
        match node.data.status {
            SearchStatus::Solved => {
                self.memo_hits += 1;
                self.observer.on_memo_hit(&node.name);
                return Ok(Resolution::Solved(node.data.cost));
            }
            SearchStatus::Failed => {
                self.observer.on_memo_hit(&node.name);
                let origin = self.failures.get(&id).copied().unwrap_or(id);
                return Ok(Resolution::Failed(origin));
            }
            // still on the stack: the path leading here is cyclic
            SearchStatus::InProgress => {
                let depth = self.on_stack.get(&id).copied().unwrap_or(0);
                self.cut = Some(self.cut.map_or(depth, |c| c.min(depth)));
                return Ok(Resolution::Failed(id));
            }
            SearchStatus::Unvisited => {}
        }
        self.charge()?;

        let h = self
            .options
            .heuristic
            .estimate(graph, id, self.min_action_cost);
        let scores = Scores::new(g, h);
        let node = graph.node_mut(id);
        node.data.status = SearchStatus::InProgress;
        node.data.scores = scores;
        let kind = node.data.kind;
        self.observer.on_node_expanded(&node.name, kind, &scores);
        let terminal = node.is_terminal();

        let depth = self.on_stack.len();
        self.on_stack.insert(id, depth);
        let outer_cut = self.cut.take();

        let resolution = if terminal {
            self.solved(graph, id, 0.0, None)
        } else {
            match kind {
                NodeKind::Or => self.resolve_or(graph, id, g)?,
                NodeKind::And => self.resolve_and(graph, id, g)?,
            }
        };

        self.on_stack.remove(&id);
        let cut = self.cut.take().filter(|&c| c < depth);
        if cut.is_some() {
            self.forget(graph, id);
        }
        self.cut = match (outer_cut, cut) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Ok(resolution)
    }

    fn resolve_or(
        &mut self,
        graph: &mut AssemblyGraph,
        id: NodeId,
        g: f64,
    ) -> Result<Resolution, PlanningError> {
        let catalog = self.catalog;
        let name = graph.node(id).name.clone();
        let mut best: Option<Candidate> = None;
        let mut any_destination_solved = false;
        let mut first_failure: Option<NodeId> = None;

        for (rank, edge_id) in self.expansion_order(graph, id, g) {
            let (destination, action_key) = {
                let edge = graph.edge(edge_id);
                (edge.destination, edge.data.action.clone())
            };
            let step_g = g + self.cheapest_cost(&action_key).unwrap_or(0.0);

            let destination_cost = match self.resolve(graph, destination, step_g)? {
                Resolution::Solved(cost) => {
                    any_destination_solved = true;
                    cost
                }
                Resolution::Failed(origin) => {
                    first_failure.get_or_insert(origin);
                    continue;
                }
            };

            let Some(action) = catalog.action(action_key.as_str()) else {
                continue;
            };
            for (agent_rank, entry) in action.feasible_costs().enumerate() {
                let interaction = match self.access(&name, &entry.agent) {
                    Access::Direct => None,
                    Access::Interaction(key) => match self.cheapest_interaction(key) {
                        Some(choice) => Some(choice),
                        None => continue,
                    },
                    Access::Blocked => continue,
                };
                let total =
                    interaction.as_ref().map_or(0.0, |i| i.cost) + entry.cost + destination_cost;
                let candidate = Candidate {
                    rank: (rank, agent_rank),
                    total,
                    decision: Decision {
                        edge: edge_id,
                        action: action_key.clone(),
                        agent: entry.agent.clone(),
                        action_cost: entry.cost,
                        interaction,
                    },
                };
                if best.as_ref().is_none_or(|b| candidate.beats(b)) {
                    best = Some(candidate);
                }
            }
        }

        match best {
            Some(c) => Ok(self.solved(graph, id, c.total, Some(c.decision))),
            None => {
                // blame the deeper node only when no destination was usable at all
                let origin = match first_failure {
                    Some(origin) if !any_destination_solved => origin,
                    _ => id,
                };
                Ok(self.failed(graph, id, origin))
            }
        }
    }

    fn resolve_and(
        &mut self,
        graph: &mut AssemblyGraph,
        id: NodeId,
        g: f64,
    ) -> Result<Resolution, PlanningError> {
        let children: Vec<NodeId> = graph.successors(id).map(|e| e.destination).collect();
        let mut total = 0.0;
        for child in children {
            match self.resolve(graph, child, g)? {
                Resolution::Solved(cost) => total += cost,
                Resolution::Failed(origin) => return Ok(self.failed(graph, id, origin)),
            }
        }
        Ok(self.solved(graph, id, total, None))
    }

    /// Outgoing edges with their insertion rank, in expansion order.
    fn expansion_order(&self, graph: &AssemblyGraph, id: NodeId, g: f64) -> Vec<(usize, EdgeId)> {
        let order: Vec<(usize, EdgeId)> = graph
            .node(id)
            .outgoing()
            .iter()
            .copied()
            .enumerate()
            .collect();
        if self.options.strategy == SearchStrategy::Exhaustive {
            return order;
        }

        let mut keyed: Vec<(f64, usize, EdgeId)> = order
            .into_iter()
            .map(|(rank, edge_id)| {
                let edge = graph.edge(edge_id);
                let f = g
                    + self.cheapest_cost(&edge.data.action).unwrap_or(f64::INFINITY)
                    + self
                        .options
                        .heuristic
                        .estimate(graph, edge.destination, self.min_action_cost);
                (f, rank, edge_id)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        keyed.into_iter().map(|(_, rank, edge)| (rank, edge)).collect()
    }

    fn cheapest_cost(&self, action: &ActionKey) -> Option<f64> {
        self.catalog
            .action(action.as_str())
            .and_then(|a| a.cheapest())
            .map(|c| c.cost)
    }

    fn access(&self, subassembly: &str, agent: &str) -> Access<'a> {
        self.catalog
            .subassembly(subassembly)
            .map_or(Access::Direct, |s| s.access_for(agent))
    }

    fn cheapest_interaction(&self, action: &str) -> Option<InteractionChoice> {
        let cheapest = self.catalog.action(action)?.cheapest()?;
        Some(InteractionChoice {
            action: ActionKey::new(action),
            agent: cheapest.agent.clone(),
            cost: cheapest.cost,
        })
    }

    fn charge(&mut self) -> Result<(), PlanningError> {
        let budget = self.options.budget;
        if let Some(max) = budget.max_expansions {
            if self.expansions >= max {
                return Err(PlanningError::BudgetExhausted {
                    expansions: self.expansions,
                });
            }
        }
        if let Some(limit) = budget.time_limit {
            if self.started.elapsed() >= limit {
                return Err(PlanningError::TimeLimitExceeded {
                    limit_ms: limit.as_millis(),
                });
            }
        }
        self.expansions += 1;
        Ok(())
    }

    fn solved(
        &mut self,
        graph: &mut AssemblyGraph,
        id: NodeId,
        cost: f64,
        decision: Option<Decision>,
    ) -> Resolution {
        let node = graph.node_mut(id);
        node.data.cost = cost;
        node.data.status = SearchStatus::Solved;
        node.data.decision = decision;
        self.observer.on_node_solved(&node.name, cost);
        Resolution::Solved(cost)
    }

    fn failed(&mut self, graph: &mut AssemblyGraph, id: NodeId, origin: NodeId) -> Resolution {
        let node = graph.node_mut(id);
        node.data.status = SearchStatus::Failed;
        self.failures.insert(id, origin);
        self.observer.on_node_failed(&node.name);
        Resolution::Failed(origin)
    }

    /// Drop a result that depended on an ancestor still being open.
    ///
    /// Cost and decision stay, since a cached ancestor may have chosen this
    /// node; the status lets the next visit recompute it.
    fn forget(&mut self, graph: &mut AssemblyGraph, id: NodeId) {
        graph.node_mut(id).data.status = SearchStatus::Unvisited;
        self.failures.remove(&id);
    }
}
