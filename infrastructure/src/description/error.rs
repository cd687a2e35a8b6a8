//! Errors raised while reading an assembly description

use assembly_application::DescriptionSourceError;
use assembly_domain::{CatalogIssue, GraphError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptionError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("node '{node}' has unknown type '{value}' (expected AND or OR)")]
    UnknownNodeType { node: String, value: String },

    #[error("action '{action}': cost '{value}' for agent '{agent}' is not a number or 'inf'")]
    InvalidCost {
        action: String,
        agent: String,
        value: String,
    },

    #[error("subassembly '{subassembly}': reachable '{value}' for agent '{agent}' is not true or false")]
    InvalidReachable {
        subassembly: String,
        agent: String,
        value: String,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("{}", .0.iter().map(|i| i.message.as_str()).collect::<Vec<_>>().join("; "))]
    Catalog(Vec<CatalogIssue>),
}

impl From<DescriptionError> for DescriptionSourceError {
    fn from(err: DescriptionError) -> Self {
        match err {
            DescriptionError::Io { .. } => DescriptionSourceError::Unreadable(err.to_string()),
            other => DescriptionSourceError::Invalid(other.to_string()),
        }
    }
}
