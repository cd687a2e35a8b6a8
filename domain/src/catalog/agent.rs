//! Agent catalog entries

use serde::{Deserialize, Serialize};

/// A worker able to execute actions.
///
/// The dispatch address is carried for the execution layer; planning only
/// uses the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl Agent {
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
