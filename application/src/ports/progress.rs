//! Progress notification port
//!
//! Defines the interface for reporting progress while a plan is computed.

use assembly_domain::{NodeKind, Scores, SearchObserver};
use tracing::trace;

/// Callback for progress updates during planning
///
/// Implementations live in the presentation layer and can display
/// progress in various ways.
pub trait PlanningProgressNotifier {
    /// Called once before the search starts
    fn on_search_start(&self, _root: &str, _nodes: usize) {}

    /// Called when a node is expanded
    fn on_node_expanded(&self, name: &str, kind: NodeKind, scores: &Scores);

    /// Called when a node's minimum cost is known
    fn on_node_solved(&self, name: &str, cost: f64);

    /// Called when a node has no feasible decomposition
    fn on_node_failed(&self, _name: &str) {}

    /// Called once after the search finished, successfully or not
    fn on_search_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PlanningProgressNotifier for NoProgress {
    fn on_node_expanded(&self, _name: &str, _kind: NodeKind, _scores: &Scores) {}
    fn on_node_solved(&self, _name: &str, _cost: f64) {}
}

/// Adapter: `PlanningProgressNotifier` → domain `SearchObserver`
///
/// Forwards search events to the progress port and traces them.
pub struct ProgressObserver<'a> {
    inner: &'a dyn PlanningProgressNotifier,
}

impl<'a> ProgressObserver<'a> {
    pub fn new(inner: &'a dyn PlanningProgressNotifier) -> Self {
        Self { inner }
    }
}

impl SearchObserver for ProgressObserver<'_> {
    fn on_node_expanded(&self, name: &str, kind: NodeKind, scores: &Scores) {
        trace!(node = name, %kind, g = scores.g, h = scores.h, f = scores.f, "expand");
        self.inner.on_node_expanded(name, kind, scores);
    }

    fn on_node_solved(&self, name: &str, cost: f64) {
        trace!(node = name, cost, "solved");
        self.inner.on_node_solved(name, cost);
    }

    fn on_node_failed(&self, name: &str) {
        trace!(node = name, "no feasible decomposition");
        self.inner.on_node_failed(name);
    }

    fn on_memo_hit(&self, name: &str) {
        trace!(node = name, "memoized");
    }
}
