//! Description source port
//!
//! Defines how the application obtains a complete planning problem.

use assembly_domain::AssemblyProblem;
use thiserror::Error;

/// Errors that can occur while reading a problem description
#[derive(Error, Debug)]
pub enum DescriptionSourceError {
    /// The description could not be read at all
    #[error("Could not read description: {0}")]
    Unreadable(String),

    /// The description was read but is structurally broken
    #[error("Invalid description: {0}")]
    Invalid(String),
}

/// Source of a fully validated planning problem.
///
/// Implementations (adapters) live in the infrastructure layer. They must
/// never hand out a partial graph: either every node, edge, catalog entry and
/// the root are consistent, or an error is returned.
pub trait DescriptionSource {
    fn load(&self) -> Result<AssemblyProblem, DescriptionSourceError>;
}

/// A problem that is already in memory
pub struct InMemorySource(pub AssemblyProblem);

impl DescriptionSource for InMemorySource {
    fn load(&self) -> Result<AssemblyProblem, DescriptionSourceError> {
        Ok(self.0.clone())
    }
}
