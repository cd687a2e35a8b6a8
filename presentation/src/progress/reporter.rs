//! Progress reporting for the planning search

use assembly_application::PlanningProgressNotifier;
use assembly_domain::{NodeKind, Scores};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::time::Duration;

/// Reports search progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: ProgressBar,
    expanded: Cell<usize>,
    failed: Cell<usize>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
            expanded: Cell::new(0),
            failed: Cell::new(0),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanningProgressNotifier for ProgressReporter {
    fn on_search_start(&self, root: &str, nodes: usize) {
        self.spinner.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        self.spinner.set_style(Self::spinner_style());
        self.spinner.set_prefix(format!("Planning {root}"));
        self.spinner.set_message(format!("{nodes} nodes"));
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_node_expanded(&self, name: &str, _kind: NodeKind, scores: &Scores) {
        let expanded = self.expanded.get() + 1;
        self.expanded.set(expanded);
        self.spinner
            .set_message(format!("{expanded} expanded, at {name} (f = {})", scores.f));
    }

    fn on_node_solved(&self, _name: &str, _cost: f64) {}

    fn on_node_failed(&self, _name: &str) {
        self.failed.set(self.failed.get() + 1);
    }

    fn on_search_complete(&self, success: bool) {
        let summary = format!(
            "{} expanded, {} infeasible",
            self.expanded.get(),
            self.failed.get()
        );
        if success {
            self.spinner
                .finish_with_message(format!("{} {}", "done".green(), summary));
        } else {
            self.spinner
                .abandon_with_message(format!("{} {}", "stopped".red(), summary));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl PlanningProgressNotifier for SimpleProgress {
    fn on_search_start(&self, root: &str, nodes: usize) {
        eprintln!("{} {} ({} nodes)", "->".cyan(), format!("Planning {root}").bold(), nodes);
    }

    fn on_node_expanded(&self, _name: &str, _kind: NodeKind, _scores: &Scores) {}

    fn on_node_solved(&self, name: &str, cost: f64) {
        eprintln!("  {} {} ({})", "v".green(), name, cost);
    }

    fn on_node_failed(&self, name: &str) {
        eprintln!("  {} {}", "x".red(), name);
    }
}
