//! CLI command definitions

use assembly_domain::{Heuristic, OutputFormat as DomainOutputFormat, PlanDirection, SearchStrategy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for planning results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every step with interactions and agent addresses
    Full,
    /// Total cost and one line per step
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// Expansion order of OR-node candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Exhaustive,
    BestFirst,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => SearchStrategy::Exhaustive,
            StrategyArg::BestFirst => SearchStrategy::BestFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    None,
    NameLength,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::None => Heuristic::None,
            HeuristicArg::NameLength => Heuristic::NameLength,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Disassembly,
    Assembly,
}

impl From<DirectionArg> for PlanDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Disassembly => PlanDirection::Disassembly,
            DirectionArg::Assembly => PlanDirection::Assembly,
        }
    }
}

/// CLI arguments for assembly-planner
#[derive(Parser, Debug)]
#[command(name = "assembly-planner")]
#[command(author, version, about = "Minimum-cost multi-agent assembly planning over AND/OR graphs")]
#[command(long_about = r#"
Assembly Planner reads an AND/OR graph of a product together with the
actions, the agents able to perform them and the reachability of every
subassembly, and computes the cheapest plan that takes the product apart
(or, with --direction assembly, builds it up).

Configuration files are loaded from (in priority order):
1. --config <path>                Explicit config file
2. ./assembly-planner.toml        Project-level config
3. ~/.config/assembly-planner/config.toml   Global config

Exit status: 0 plan found, 1 error, 2 usage error, 3 no feasible plan.

Example:
  assembly-planner gearbox.toml
  assembly-planner gearbox.toml -o json --direction assembly
  assembly-planner gearbox.toml --strategy best-first --heuristic name-length --dot plan.dot
"#)]
pub struct Cli {
    /// Assembly description (TOML); not required with --show-config
    #[arg(value_name = "DESCRIPTION")]
    pub description: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write the annotated graph in Graphviz DOT format to this file
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Order in which candidate actions are expanded
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Estimate used to order best-first expansion
    #[arg(long, value_enum)]
    pub heuristic: Option<HeuristicArg>,

    /// Abort after expanding this many nodes
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<usize>,

    /// Abort after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub time_limit_ms: Option<u64>,

    /// Order in which plan steps are printed
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "assembly-planner",
            "gearbox.toml",
            "-o",
            "json",
            "--dot",
            "plan.dot",
            "--strategy",
            "best-first",
            "--heuristic",
            "name-length",
            "--max-expansions",
            "50",
            "--direction",
            "assembly",
            "-vv",
            "-q",
        ]);

        assert_eq!(cli.description, Some(PathBuf::from("gearbox.toml")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.dot, Some(PathBuf::from("plan.dot")));
        assert_eq!(cli.strategy.map(SearchStrategy::from), Some(SearchStrategy::BestFirst));
        assert_eq!(cli.heuristic.map(Heuristic::from), Some(Heuristic::NameLength));
        assert_eq!(cli.max_expansions, Some(50));
        assert_eq!(cli.direction.map(PlanDirection::from), Some(PlanDirection::Assembly));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_defaults_leave_config_in_charge() {
        let cli = Cli::parse_from(["assembly-planner", "gearbox.toml"]);
        assert!(cli.output.is_none());
        assert!(cli.strategy.is_none());
        assert!(cli.direction.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_show_config_without_description() {
        let cli = Cli::parse_from(["assembly-planner", "--show-config"]);
        assert!(cli.description.is_none());
        assert!(cli.show_config);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["assembly-planner", "x.toml", "--strategy", "greedy"]).is_err());
    }
}
