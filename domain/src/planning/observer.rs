//! Search observation hooks

use crate::assembly::{NodeKind, Scores};

/// Receives events while the planner walks the graph.
///
/// All methods default to no-ops.
pub trait SearchObserver {
    /// A node is expanded for the first time in this run
    fn on_node_expanded(&self, _name: &str, _kind: NodeKind, _scores: &Scores) {}

    /// A node's minimum cost became known
    fn on_node_solved(&self, _name: &str, _cost: f64) {}

    /// A node turned out to have no feasible decomposition
    fn on_node_failed(&self, _name: &str) {}

    /// A memoized result was reused instead of recomputed
    fn on_memo_hit(&self, _name: &str) {}
}

/// Observer that ignores every event
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
