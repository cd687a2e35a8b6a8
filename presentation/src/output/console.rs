//! Console output formatter for planning results

use crate::output::formatter::OutputFormatter;
use assembly_application::{PlanAssemblyOutput, PlanOutcome};
use assembly_domain::{AssemblyPlan, Catalog, PlanStep};
use colored::Colorize;

/// Formats planning results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result
    pub fn format(output: &PlanAssemblyOutput) -> String {
        let mut text = String::new();

        // Header
        text.push_str(&Self::header("Assembly Plan"));
        text.push('\n');

        text.push_str(&format!(
            "{} {}\n",
            "Root:".cyan().bold(),
            output.problem.root
        ));

        let plan = match &output.outcome {
            PlanOutcome::Planned(plan) => plan,
            PlanOutcome::Unsolvable { node } => {
                text.push_str(&Self::unsolvable(node));
                text.push_str(&Self::footer());
                return text;
            }
        };

        text.push_str(&format!(
            "{} {}\n",
            "Direction:".cyan().bold(),
            plan.direction
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Total cost:".cyan().bold(),
            plan.total_cost.to_string().green().bold()
        ));

        // Steps
        text.push_str(&Self::section_header("Steps"));
        if plan.is_empty() {
            text.push_str("  (nothing to do: the root is already a single part)\n");
        }
        for (i, step) in plan.steps.iter().enumerate() {
            text.push_str(&Self::step_line(i + 1, step));
            if let Some(interaction) = &step.interaction {
                text.push_str(&format!(
                    "      {} {} by {} (cost {})\n",
                    "after".dimmed(),
                    interaction.action.as_str().yellow(),
                    interaction.agent,
                    interaction.cost
                ));
            }
        }

        // Agents
        let dispatch = Self::dispatch_table(plan, &output.problem.catalog);
        if !dispatch.is_empty() {
            text.push_str(&Self::section_header("Agents"));
            text.push_str(&dispatch);
        }

        if let Some(stats) = &output.stats {
            text.push_str(&format!(
                "\n{} {} expansions, {} memo hits, {} ms\n",
                "Search:".dimmed(),
                stats.expansions,
                stats.memo_hits,
                output.elapsed.as_millis()
            ));
        }

        text.push_str(&Self::footer());
        text
    }

    /// Format as JSON
    pub fn format_json(output: &PlanAssemblyOutput) -> String {
        serde_json::to_string_pretty(&output.report()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format total cost and one line per step (concise output)
    pub fn format_summary(output: &PlanAssemblyOutput) -> String {
        match &output.outcome {
            PlanOutcome::Planned(plan) => {
                let mut text = format!("{} {}\n", "Total cost:".bold(), plan.total_cost);
                for (i, step) in plan.steps.iter().enumerate() {
                    text.push_str(&format!(
                        "{:>3}. {}: {} by {} ({})\n",
                        i + 1,
                        step.subassembly,
                        step.action,
                        step.agent,
                        step.step_cost()
                    ));
                }
                text
            }
            PlanOutcome::Unsolvable { node } => Self::unsolvable(node),
        }
    }

    fn step_line(number: usize, step: &PlanStep) -> String {
        format!(
            "{:>3}. {} {} {}  {} {}  {}\n",
            number,
            step.subassembly.bold(),
            format!("--{}-->", step.action).yellow(),
            step.result,
            "by".dimmed(),
            step.agent.cyan(),
            format!("(cost {}, subtree {})", step.step_cost(), step.subtree_cost).dimmed()
        )
    }

    /// One line per agent used, with its dispatch address when known
    fn dispatch_table(plan: &AssemblyPlan, catalog: &Catalog) -> String {
        plan.agents()
            .into_iter()
            .map(|name| {
                let address = catalog
                    .agent(name)
                    .map(|a| a.address())
                    .unwrap_or_else(|| "(no address)".to_string());
                format!("  {:<16} {}\n", name, address)
            })
            .collect()
    }

    fn unsolvable(node: &str) -> String {
        format!(
            "{} no feasible plan (infeasible at node '{}')\n",
            "Unsolvable:".red().bold(),
            node
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &PlanAssemblyOutput) -> String {
        Self::format(output)
    }

    fn format_json(&self, output: &PlanAssemblyOutput) -> String {
        Self::format_json(output)
    }

    fn format_summary(&self, output: &PlanAssemblyOutput) -> String {
        Self::format_summary(output)
    }
}
