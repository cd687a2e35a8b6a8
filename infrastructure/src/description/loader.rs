//! TOML description reader
//!
//! Builds the graph and the three catalogs from one file. The result is
//! all-or-nothing: a problem is only returned once every node, edge and
//! catalog cross reference checks out.

use super::error::DescriptionError;
use super::raw::{RawDescription, RawNode};
use assembly_application::{DescriptionSource, DescriptionSourceError};
use assembly_domain::{
    Action, Agent, AssemblyGraph, AssemblyProblem, Catalog, CatalogIssue, CatalogIssueCode,
    NodeKind, Reach, Severity, Subassembly, has_errors,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A problem together with the non-fatal issues found while reading it
#[derive(Debug)]
pub struct LoadedDescription {
    pub problem: AssemblyProblem,
    pub warnings: Vec<CatalogIssue>,
}

/// Reads an assembly description from a TOML file
#[derive(Debug, Clone)]
pub struct TomlDescriptionLoader {
    path: PathBuf,
}

impl TomlDescriptionLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file.
    pub fn read(&self) -> Result<LoadedDescription, DescriptionError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| DescriptionError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "Read description");
        parse_description(&text)
    }
}

impl DescriptionSource for TomlDescriptionLoader {
    fn load(&self) -> Result<AssemblyProblem, DescriptionSourceError> {
        let loaded = self.read()?;
        for issue in &loaded.warnings {
            warn!("{}", issue.message);
        }
        info!(
            path = %self.path.display(),
            nodes = loaded.problem.graph.number_of_nodes(),
            actions = loaded.problem.catalog.actions().len(),
            agents = loaded.problem.catalog.agents().len(),
            "Loaded description"
        );
        Ok(loaded.problem)
    }
}

/// Parse a description from TOML text.
pub fn parse_description(text: &str) -> Result<LoadedDescription, DescriptionError> {
    let raw: RawDescription = toml::from_str(text)?;
    let mut warnings = Vec::new();

    let graph = build_graph(&raw)?;
    let catalog = build_catalog(&raw, &mut warnings)?;

    let mut issues = catalog.validate();
    issues.extend(edge_action_issues(&graph, &catalog));
    if has_errors(&issues) {
        return Err(DescriptionError::Catalog(
            issues
                .into_iter()
                .filter(|i| i.severity == Severity::Error)
                .collect(),
        ));
    }
    warnings.extend(issues);

    let problem = AssemblyProblem::new(graph, catalog, raw.root)?;
    Ok(LoadedDescription { problem, warnings })
}

fn node_kind(node: &RawNode) -> Result<NodeKind, DescriptionError> {
    match node.kind.trim().to_uppercase().as_str() {
        "AND" => Ok(NodeKind::And),
        "OR" => Ok(NodeKind::Or),
        _ => Err(DescriptionError::UnknownNodeType {
            node: node.name.clone(),
            value: node.kind.clone(),
        }),
    }
}

fn build_graph(raw: &RawDescription) -> Result<AssemblyGraph, DescriptionError> {
    let mut graph = AssemblyGraph::with_capacity(raw.nodes.len(), raw.edges.len());
    for node in &raw.nodes {
        match node_kind(node)? {
            NodeKind::And => graph.insert_and(node.name.as_str())?,
            NodeKind::Or => graph.insert_or(node.name.as_str())?,
        };
    }
    for edge in &raw.edges {
        let action = edge.action.as_deref().unwrap_or(&edge.end);
        graph.insert_action_edge(action, &edge.start, &edge.end)?;
    }
    Ok(graph)
}

fn build_catalog(
    raw: &RawDescription,
    warnings: &mut Vec<CatalogIssue>,
) -> Result<Catalog, DescriptionError> {
    let mut catalog = Catalog::new();

    for entry in &raw.agents {
        let agent = Agent::new(entry.name.as_str(), entry.host.as_str(), entry.port);
        if catalog.insert_agent(agent).is_some() {
            warnings.push(duplicate("agent", &entry.name));
        }
    }

    for entry in &raw.actions {
        let mut action = Action::new(entry.name.as_str());
        for cost in &entry.costs {
            let value = cost
                .value
                .to_cost()
                .ok_or_else(|| DescriptionError::InvalidCost {
                    action: entry.name.clone(),
                    agent: cost.agent.clone(),
                    value: cost.value.describe(),
                })?;
            action.set_cost(cost.agent.as_str(), value);
        }
        if catalog.insert_action(action).is_some() {
            warnings.push(duplicate("action", &entry.name));
        }
    }

    for entry in &raw.subassemblies {
        let mut subassembly = Subassembly::new(entry.name.as_str());
        for reach in &entry.reach {
            let reachable =
                reach
                    .reachable
                    .to_bool()
                    .ok_or_else(|| DescriptionError::InvalidReachable {
                        subassembly: entry.name.clone(),
                        agent: reach.agent.clone(),
                        value: reach.reachable.describe(),
                    })?;
            let interaction = reach
                .interaction
                .as_deref()
                .map(|i| i.trim().to_lowercase())
                .filter(|i| !i.is_empty());
            subassembly.set_reach(Reach {
                agent: reach.agent.clone(),
                reachable,
                interaction,
            });
        }
        if catalog.insert_subassembly(subassembly).is_some() {
            warnings.push(duplicate("subassembly", &entry.name));
        }
    }

    Ok(catalog)
}

/// OR-node edges whose action has no catalog entry can never be selected.
fn edge_action_issues(graph: &AssemblyGraph, catalog: &Catalog) -> Vec<CatalogIssue> {
    graph
        .edges()
        .filter(|e| graph.node(e.source).data.kind == NodeKind::Or)
        .filter(|e| catalog.action(e.data.action.as_str()).is_none())
        .map(|e| {
            let from = graph.node(e.source).name.clone();
            let action = e.data.action.as_str().to_string();
            CatalogIssue {
                severity: Severity::Warning,
                message: format!("edge from '{from}' uses action '{action}' which is not in the action catalog"),
                code: CatalogIssueCode::UnknownEdgeAction { from, action },
            }
        })
        .collect()
}

fn duplicate(kind: &'static str, name: &str) -> CatalogIssue {
    CatalogIssue {
        severity: Severity::Warning,
        code: CatalogIssueCode::DuplicateEntry {
            kind,
            name: name.to_string(),
        },
        message: format!("{kind} '{name}' is declared more than once; the last entry wins"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assembly_domain::{Access, GraphError};
    use std::fs;

    const SPLIT: &str = r#"
root = "P"

[[nodes]]
name = "P"
type = "OR"

[[nodes]]
name = "AB"
type = "and"

[[nodes]]
name = "A"
type = "Or"

[[nodes]]
name = "B"
type = "OR"

[[edges]]
start = "P"
end = "AB"
action = "split"

[[edges]]
start = "AB"
end = "A"

[[edges]]
start = "AB"
end = "B"

[[actions]]
name = "split"
costs = [{ agent = "agentX", value = 5 }, { agent = "agentY", value = "7" }]

[[actions]]
name = "unlock"
costs = [{ agent = "agentX", value = "inf" }, { agent = "agentY", value = 2.0 }]

[[subassemblies]]
name = "P"
reach = [{ agent = "agentX", reachable = "false", interaction = "UNLOCK" }]

[[agents]]
name = "agentX"
host = "10.0.0.1"
port = 7000

[[agents]]
name = "agentY"
host = "10.0.0.2"
port = 7001
"#;

    fn with(extra: &str) -> String {
        format!("{SPLIT}\n{extra}")
    }

    #[test]
    fn test_parse_full_description() {
        let loaded = parse_description(SPLIT).unwrap();
        let problem = loaded.problem;

        assert!(loaded.warnings.is_empty());
        assert_eq!(problem.root, "P");
        assert_eq!(problem.graph.number_of_nodes(), 4);
        assert_eq!(problem.graph.number_of_edges(), 3);
        assert_eq!(problem.graph.count_kind(NodeKind::And), 1);
        assert_eq!(problem.graph.edge_from("P", 0).unwrap().data.action.as_str(), "split");
        assert_eq!(problem.graph.edge_from("AB", 1).unwrap().data.action.as_str(), "B");

        let split = problem.catalog.action("split").unwrap();
        assert_eq!(split.cost_for("agentY"), Some(7.0));
        let unlock = problem.catalog.action("unlock").unwrap();
        assert_eq!(unlock.cost_for("agentX"), Some(f64::INFINITY));

        let p = problem.catalog.subassembly("P").unwrap();
        assert_eq!(p.access_for("agentX"), Access::Interaction("unlock"));
        assert_eq!(p.access_for("agentY"), Access::Direct);
        assert_eq!(problem.catalog.agent("agentY").unwrap().address(), "10.0.0.2:7001");
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let problem = parse_description(SPLIT).unwrap().problem;
        let agents: Vec<_> = problem
            .catalog
            .action("split")
            .unwrap()
            .costs
            .iter()
            .map(|c| c.agent.as_str())
            .collect();
        assert_eq!(agents, vec!["agentX", "agentY"]);
        assert_eq!(problem.catalog.actions()[1].name.as_str(), "unlock");
    }

    #[test]
    fn test_unknown_node_type_fails() {
        let text = SPLIT.replace("type = \"and\"", "type = \"XOR\"");
        let err = parse_description(&text).unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::UnknownNodeType { ref node, ref value } if node == "AB" && value == "XOR"
        ));
    }

    #[test]
    fn test_dangling_edge_fails() {
        let text = with("[[edges]]\nstart = \"AB\"\nend = \"C\"\n");
        let err = parse_description(&text).unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::Graph(GraphError::MissingEndpoint { ref missing, .. }) if missing == "C"
        ));
    }

    #[test]
    fn test_duplicate_node_fails() {
        let text = with("[[nodes]]\nname = \"A\"\ntype = \"OR\"\n");
        let err = parse_description(&text).unwrap_err();
        assert!(matches!(err, DescriptionError::Graph(GraphError::DuplicateNode(_))));
    }

    #[test]
    fn test_unknown_root_fails() {
        let text = SPLIT.replace("root = \"P\"", "root = \"Q\"");
        let err = parse_description(&text).unwrap_err();
        assert_eq!(err.to_string(), "Node 'Q' not in graph");
    }

    #[test]
    fn test_invalid_cost_fails() {
        let text = SPLIT.replace("value = \"7\"", "value = \"seven\"");
        let err = parse_description(&text).unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::InvalidCost { ref action, ref agent, ref value }
                if action == "split" && agent == "agentY" && value == "seven"
        ));
    }

    #[test]
    fn test_nan_cost_fails() {
        let text = SPLIT.replace("value = 5 }", "value = nan }");
        let err = parse_description(&text).unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::InvalidCost { ref action, ref agent, ref value }
                if action == "split" && agent == "agentX" && value == "NaN"
        ));
    }

    #[test]
    fn test_invalid_reachable_fails() {
        let text = SPLIT.replace("reachable = \"false\"", "reachable = \"maybe\"");
        assert!(matches!(
            parse_description(&text).unwrap_err(),
            DescriptionError::InvalidReachable { .. }
        ));
    }

    #[test]
    fn test_unknown_interaction_is_an_error() {
        let text = SPLIT.replace("interaction = \"UNLOCK\"", "interaction = \"pry\"");
        let err = parse_description(&text).unwrap_err();
        match err {
            DescriptionError::Catalog(issues) => {
                assert_eq!(issues.len(), 1);
                assert!(matches!(
                    &issues[0].code,
                    CatalogIssueCode::UnknownInteraction { interaction, .. } if interaction == "pry"
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_soft_issues_become_warnings() {
        let text = with(
            r#"
[[actions]]
name = "split"
costs = [{ agent = "robot", value = 1 }]

[[edges]]
start = "A"
end = "B"
action = "weld"
"#,
        );

        let loaded = parse_description(&text).unwrap();

        let codes: Vec<_> = loaded.warnings.iter().map(|w| w.code.clone()).collect();
        assert!(codes.contains(&CatalogIssueCode::DuplicateEntry {
            kind: "action",
            name: "split".to_string()
        }));
        assert!(codes.contains(&CatalogIssueCode::UnknownAgent {
            entry: "split".to_string(),
            agent: "robot".to_string()
        }));
        assert!(codes.contains(&CatalogIssueCode::UnknownEdgeAction {
            from: "A".to_string(),
            action: "weld".to_string()
        }));
        // the later declaration replaced the earlier one
        assert_eq!(loaded.problem.catalog.action("split").unwrap().cost_for("agentX"), None);
    }

    #[test]
    fn test_gearbox_demo_plans() {
        let loaded = parse_description(include_str!("../../../demos/gearbox.toml")).unwrap();
        assert!(loaded.warnings.is_empty());
        let mut problem = loaded.problem;

        let stats = assembly_domain::Planner::new(&problem.catalog)
            .plan(&mut problem.graph, &problem.root)
            .unwrap();

        assert_eq!(stats.total_cost, 6.0);
        assert_eq!(stats.memo_hits, 1);
        let core = problem.graph.node_by_name("Core").unwrap();
        assert_eq!(core.data.worker(), Some("robot"));
        assert_eq!(core.data.decision.as_ref().unwrap().step_cost(), 3.0);
    }

    #[test]
    fn test_malformed_toml_fails() {
        assert!(matches!(
            parse_description("root = ").unwrap_err(),
            DescriptionError::Parse(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("split.toml");
        fs::write(&path, SPLIT).unwrap();

        let problem = TomlDescriptionLoader::new(&path).load().unwrap();
        assert_eq!(problem.root, "P");
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let loader = TomlDescriptionLoader::new(dir.path().join("absent.toml"));

        let err = loader.load().unwrap_err();
        assert!(matches!(err, DescriptionSourceError::Unreadable(_)));
    }

    #[test]
    fn test_invalid_description_maps_to_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, SPLIT.replace("root = \"P\"", "root = \"Q\"")).unwrap();

        let err = TomlDescriptionLoader::new(path).load().unwrap_err();
        assert!(matches!(err, DescriptionSourceError::Invalid(_)));
    }
}
