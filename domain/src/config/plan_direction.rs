//! Plan direction value object

use serde::{Deserialize, Serialize};

/// Whether the plan takes the product apart or builds it up.
///
/// The search always runs on the disassembly graph; an assembly plan is the
/// same set of steps in reverse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanDirection {
    #[default]
    Disassembly,
    Assembly,
}

impl std::str::FromStr for PlanDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disassembly" => Ok(Self::Disassembly),
            "assembly" => Ok(Self::Assembly),
            other => Err(format!("unknown plan direction '{other}'")),
        }
    }
}

impl std::fmt::Display for PlanDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanDirection::Disassembly => write!(f, "disassembly"),
            PlanDirection::Assembly => write!(f, "assembly"),
        }
    }
}
