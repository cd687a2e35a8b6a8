//! Catalog validation issues.
//!
//! Validation returns every detected issue at once with a severity, so an
//! input adapter can fail on errors and log warnings.

/// Severity level of a catalog issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the problem cannot be planned.
    Error,
    /// Non-fatal: planning works but the description is probably wrong.
    Warning,
}

/// Identifies a specific catalog issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssueCode {
    /// A subassembly names an interaction that is not in the action catalog.
    UnknownInteraction {
        subassembly: String,
        agent: String,
        interaction: String,
    },
    /// An action or subassembly references an agent missing from the agent catalog.
    UnknownAgent { entry: String, agent: String },
    /// No agent has a feasible cost for the action.
    InfeasibleAction { action: String },
    /// An edge leaving an OR-node names an action missing from the catalog.
    UnknownEdgeAction { from: String, action: String },
    /// The same name was declared twice; the later entry wins.
    DuplicateEntry { kind: &'static str, name: String },
}

/// A detected issue in the catalog.
#[derive(Debug, Clone)]
pub struct CatalogIssue {
    pub severity: Severity,
    pub code: CatalogIssueCode,
    pub message: String,
}

/// Whether any issue is fatal.
pub fn has_errors(issues: &[CatalogIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
