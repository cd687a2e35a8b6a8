//! Planner configuration issues.
//!
//! Settings files are read leniently: an unusable value falls back to its
//! default and is reported here instead of failing the run.

use crate::catalog::Severity;

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its enumeration.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric limit is out of range (e.g. zero expansions).
    InvalidLimit { field: String },
}

/// A detected issue in the planner configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Warning for a value that could not be parsed, naming the fallback.
    pub fn invalid_enum(field: &str, value: &str, valid: &[&str], fallback: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidEnumValue {
                field: field.to_string(),
                value: value.to_string(),
                valid_values: valid.iter().map(|v| v.to_string()).collect(),
            },
            message: format!("{field}: unknown value '{value}', falling back to '{fallback}'"),
        }
    }
}
