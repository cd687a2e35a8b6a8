//! Planner configuration from TOML (`[planner]` section)

use assembly_application::PlannerParams;
use assembly_domain::{ConfigIssue, ConfigIssueCode, Heuristic, PlanDirection, SearchStrategy, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw planner configuration from TOML
///
/// # Example
///
/// ```toml
/// [planner]
/// strategy = "best-first"        # "exhaustive" or "best-first"
/// heuristic = "name-length"      # "none" or "name-length"
/// direction = "assembly"         # "disassembly" or "assembly"
/// max_expansions = 100000
/// time_limit_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlannerConfig {
    pub strategy: String,
    pub heuristic: String,
    pub direction: String,
    pub max_expansions: Option<usize>,
    pub time_limit_ms: Option<u64>,
}

impl Default for FilePlannerConfig {
    fn default() -> Self {
        Self {
            strategy: "exhaustive".to_string(),
            heuristic: "none".to_string(),
            direction: "disassembly".to_string(),
            max_expansions: None,
            time_limit_ms: None,
        }
    }
}

impl FilePlannerConfig {
    /// Parse strategy string, returning warnings on failure.
    pub fn parse_strategy(&self) -> (SearchStrategy, Vec<ConfigIssue>) {
        match self.strategy.parse::<SearchStrategy>() {
            Ok(strategy) => (strategy, vec![]),
            Err(_) => (
                SearchStrategy::default(),
                vec![ConfigIssue::invalid_enum(
                    "planner.strategy",
                    &self.strategy,
                    &["exhaustive", "best-first"],
                    "exhaustive",
                )],
            ),
        }
    }

    pub fn parse_heuristic(&self) -> (Heuristic, Vec<ConfigIssue>) {
        match self.heuristic.parse::<Heuristic>() {
            Ok(heuristic) => (heuristic, vec![]),
            Err(_) => (
                Heuristic::default(),
                vec![ConfigIssue::invalid_enum(
                    "planner.heuristic",
                    &self.heuristic,
                    &["none", "name-length"],
                    "none",
                )],
            ),
        }
    }

    pub fn parse_direction(&self) -> (PlanDirection, Vec<ConfigIssue>) {
        match self.direction.parse::<PlanDirection>() {
            Ok(direction) => (direction, vec![]),
            Err(_) => (
                PlanDirection::default(),
                vec![ConfigIssue::invalid_enum(
                    "planner.direction",
                    &self.direction,
                    &["disassembly", "assembly"],
                    "disassembly",
                )],
            ),
        }
    }

    /// Zero limits would abort every run before the root is expanded.
    pub fn parse_limits(&self) -> (Option<usize>, Option<Duration>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let max_expansions = match self.max_expansions {
            Some(0) => {
                issues.push(Self::zero_limit("planner.max_expansions"));
                None
            }
            other => other,
        };
        let time_limit = match self.time_limit_ms {
            Some(0) => {
                issues.push(Self::zero_limit("planner.time_limit_ms"));
                None
            }
            other => other.map(Duration::from_millis),
        };
        (max_expansions, time_limit, issues)
    }

    /// Convert to use case parameters, collecting every issue.
    pub fn to_params(&self) -> (PlannerParams, Vec<ConfigIssue>) {
        let (strategy, mut issues) = self.parse_strategy();
        let (heuristic, heuristic_issues) = self.parse_heuristic();
        let (direction, direction_issues) = self.parse_direction();
        let (max_expansions, time_limit, limit_issues) = self.parse_limits();
        issues.extend(heuristic_issues);
        issues.extend(direction_issues);
        issues.extend(limit_issues);

        let params = PlannerParams::default()
            .with_strategy(strategy)
            .with_heuristic(heuristic)
            .with_direction(direction)
            .with_max_expansions(max_expansions)
            .with_time_limit(time_limit);
        (params, issues)
    }

    fn zero_limit(field: &str) -> ConfigIssue {
        ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidLimit {
                field: field.to_string(),
            },
            message: format!("{field}: 0 is not a usable limit, ignoring it"),
        }
    }
}
