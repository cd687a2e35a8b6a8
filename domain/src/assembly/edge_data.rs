//! Edge payload of the assembly graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque key naming an action in the [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionKey(String);

impl ActionKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActionKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Data carried by an edge: applying `action` at the source subassembly
/// yields the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    pub action: ActionKey,
    /// Set by solution extraction when the edge lies on the selected plan
    pub solution: bool,
}

impl EdgeData {
    pub fn new(action: impl Into<ActionKey>) -> Self {
        Self {
            action: action.into(),
            solution: false,
        }
    }
}
