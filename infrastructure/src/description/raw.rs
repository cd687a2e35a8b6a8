//! Raw TOML structure of an assembly description
//!
//! Mirrors the file one-to-one; conversion into domain types happens in the
//! loader so every error can name the entry it came from.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RawDescription {
    pub root: String,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
    #[serde(default)]
    pub actions: Vec<RawAction>,
    #[serde(default)]
    pub subassemblies: Vec<RawSubassembly>,
    #[serde(default)]
    pub agents: Vec<RawAgent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub name: String,
    /// "AND" or "OR", any case
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEdge {
    pub start: String,
    pub end: String,
    /// Defaults to the destination name
    pub action: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAction {
    pub name: String,
    #[serde(default)]
    pub costs: Vec<RawCost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCost {
    pub agent: String,
    pub value: RawCostValue,
}

/// A cost written either as a number or as text (`"inf"`, `"12.5"`)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCostValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubassembly {
    pub name: String,
    #[serde(default)]
    pub reach: Vec<RawReach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReach {
    pub agent: String,
    pub reachable: RawFlag,
    pub interaction: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAgent {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl RawCostValue {
    /// Numeric cost; `"inf"` is infinite. `None` for unparsable text and NaN.
    pub fn to_cost(&self) -> Option<f64> {
        match self {
            RawCostValue::Number(value) => Some(*value).filter(|v| !v.is_nan()),
            RawCostValue::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("inf") {
                    Some(f64::INFINITY)
                } else {
                    text.parse::<f64>().ok().filter(|v| !v.is_nan())
                }
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RawCostValue::Number(value) => value.to_string(),
            RawCostValue::Text(text) => text.clone(),
        }
    }
}

impl RawFlag {
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            RawFlag::Bool(flag) => Some(*flag),
            RawFlag::Text(text) => match text.trim().to_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RawFlag::Bool(flag) => flag.to_string(),
            RawFlag::Text(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_values() {
        let cost = |text: &str| RawCostValue::Text(text.to_string()).to_cost();
        assert_eq!(cost("inf"), Some(f64::INFINITY));
        assert_eq!(cost("INF"), Some(f64::INFINITY));
        assert_eq!(cost(" 4.5 "), Some(4.5));
        assert_eq!(cost("cheap"), None);
        assert_eq!(cost("NaN"), None);
        assert_eq!(RawCostValue::Number(3.0).to_cost(), Some(3.0));
        assert_eq!(RawCostValue::Number(f64::NAN).to_cost(), None);
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(RawFlag::Text("TRUE".to_string()).to_bool(), Some(true));
        assert_eq!(RawFlag::Text("false".to_string()).to_bool(), Some(false));
        assert_eq!(RawFlag::Text("yes".to_string()).to_bool(), None);
        assert_eq!(RawFlag::Bool(false).to_bool(), Some(false));
    }

    #[test]
    fn test_mixed_value_types_deserialize() {
        let raw: RawDescription = toml::from_str(
            r#"
root = "P"

[[actions]]
name = "split"
costs = [{ agent = "x", value = 5 }, { agent = "y", value = "inf" }]

[[subassemblies]]
name = "P"
reach = [{ agent = "x", reachable = "False", interaction = "Unlock" }]
"#,
        )
        .unwrap();

        assert!(raw.nodes.is_empty());
        assert_eq!(raw.actions[0].costs[0].value.to_cost(), Some(5.0));
        assert_eq!(raw.actions[0].costs[1].value.to_cost(), Some(f64::INFINITY));
        assert_eq!(raw.subassemblies[0].reach[0].reachable.to_bool(), Some(false));
    }
}
