//! Graphviz export of an annotated AND/OR graph
//!
//! AND-nodes are boxes, OR-nodes ellipses. Nodes and edges of the selected
//! plan are drawn bold in blue; OR-nodes of the plan carry their cost and
//! worker in the label.

use assembly_domain::{AssemblyGraph, NodeKind};
use std::fmt::Write;

const SOLUTION_COLOR: &str = "blue";

/// Renders an [`AssemblyGraph`] as DOT text
pub struct DotWriter;

impl DotWriter {
    pub fn render(graph: &AssemblyGraph, root: &str) -> String {
        let mut dot = String::new();
        let _ = writeln!(dot, "digraph \"{}\" {{", escape(root));
        dot.push_str("  rankdir=TB;\n");

        for node in graph.nodes() {
            let shape = match node.data.kind {
                NodeKind::And => "box",
                NodeKind::Or => "ellipse",
            };
            let mut label = escape(&node.name);
            if node.data.solution && node.data.kind == NodeKind::Or {
                let _ = write!(label, "\\ncost {}", node.data.cost);
                if let Some(worker) = node.data.worker() {
                    let _ = write!(label, "\\n{}", escape(worker));
                }
            }
            let style = if node.data.solution {
                format!(", style=bold, color={SOLUTION_COLOR}")
            } else {
                String::new()
            };
            let _ = writeln!(
                dot,
                "  \"{}\" [shape={shape}, label=\"{label}\"{style}];",
                escape(&node.name)
            );
        }

        for edge in graph.edges() {
            let from = graph.node(edge.source);
            let to = graph.node(edge.destination);
            let mut attrs = Vec::new();
            if from.data.kind == NodeKind::Or {
                attrs.push(format!("label=\"{}\"", escape(edge.data.action.as_str())));
            }
            if edge.data.solution {
                attrs.push(format!("color={SOLUTION_COLOR}"));
                attrs.push("penwidth=2".to_string());
            }
            let attrs = if attrs.is_empty() {
                String::new()
            } else {
                format!(" [{}]", attrs.join(", "))
            };
            let _ = writeln!(
                dot,
                "  \"{}\" -> \"{}\"{attrs};",
                escape(&from.name),
                escape(&to.name)
            );
        }

        dot.push_str("}\n");
        dot
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", "\\n")
        .replace(['\n', '\r'], "\\n")
}
