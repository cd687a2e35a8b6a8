//! CLI entrypoint for Assembly Planner
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use assembly_application::{
    PlanAssemblyUseCase, PlanOutcome, PlannerParams, PlanningProgressNotifier,
};
use assembly_domain::{Heuristic, PlanDirection, SearchStrategy};
use assembly_infrastructure::{ConfigLoader, FileConfig, TomlDescriptionLoader};
use assembly_presentation::{
    Cli, ConsoleFormatter, DotWriter, OutputConfig, OutputFormatter, ProgressReporter,
    SimpleProgress,
};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Kept clear of clap's usage-error status (2)
const EXIT_UNSOLVABLE: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(description) = cli.description.clone() else {
        bail!("A description file is required. See --help for usage.");
    };

    let file_config = load_config(&cli)?;
    let (params, output_config) = resolve(&cli, &file_config);
    if !output_config.color {
        colored::control::set_override(false);
    }

    info!("Starting Assembly Planner");

    // === Dependency Injection ===
    let source = TomlDescriptionLoader::new(description);
    let use_case = PlanAssemblyUseCase::new(source);

    let output = if output_config.wants_progress() {
        // plain lines when stderr is redirected
        let progress: Box<dyn PlanningProgressNotifier> = if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        use_case.execute_with_progress(&params, progress.as_ref())?
    } else {
        use_case.execute(&params)?
    };

    if let Some(path) = &output_config.dot {
        std::fs::write(path, DotWriter::render(&output.problem.graph, &output.problem.root))
            .with_context(|| format!("cannot write DOT export to {}", path.display()))?;
        info!(path = %path.display(), "Wrote DOT export");
    }

    println!("{}", ConsoleFormatter.render(&output, output_config.format));

    Ok(ExitCode::from(exit_status(&output.outcome)))
}

fn exit_status(outcome: &PlanOutcome) -> u8 {
    match outcome {
        PlanOutcome::Planned(_) => 0,
        PlanOutcome::Unsolvable { .. } => EXIT_UNSOLVABLE,
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
    }

    let config = ConfigLoader::load(cli.config.as_ref()).context("invalid configuration")?;
    for issue in config.validate() {
        warn!("{}", issue.message);
    }
    Ok(config)
}

/// Merge file configuration with CLI flags; flags win.
fn resolve(cli: &Cli, file: &FileConfig) -> (PlannerParams, OutputConfig) {
    let (mut params, _) = file.planner.to_params();

    if let Some(strategy) = cli.strategy {
        params = params.with_strategy(SearchStrategy::from(strategy));
    }
    if let Some(heuristic) = cli.heuristic {
        params = params.with_heuristic(Heuristic::from(heuristic));
    }
    if let Some(direction) = cli.direction {
        params = params.with_direction(PlanDirection::from(direction));
    }
    if cli.max_expansions.is_some() {
        params = params.with_max_expansions(cli.max_expansions);
    }
    if let Some(ms) = cli.time_limit_ms {
        params = params.with_time_limit(Some(Duration::from_millis(ms)));
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(file.output.format)
            .unwrap_or_default(),
        color: file.output.color && !cli.no_color,
        dot: cli.dot.clone().or_else(|| file.output.dot.clone()),
        show_progress: !cli.quiet,
    };

    (params, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assembly_domain::OutputFormat;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("assembly-planner").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_override_file() {
        let file: FileConfig = toml::from_str(
            r#"
[planner]
strategy = "best-first"
max_expansions = 10

[output]
format = "summary"
dot = "from-file.dot"
"#,
        )
        .unwrap();

        let (params, output) = resolve(
            &cli(&["x.toml", "--strategy", "exhaustive", "-o", "json", "--max-expansions", "99"]),
            &file,
        );

        assert_eq!(params.strategy, SearchStrategy::Exhaustive);
        assert_eq!(params.max_expansions, Some(99));
        assert_eq!(output.format, OutputFormat::Json);
        assert_eq!(output.dot, Some("from-file.dot".into()));
    }

    #[test]
    fn test_unsolvable_status_differs_from_usage_error() {
        let unsolvable = PlanOutcome::Unsolvable {
            node: "P".to_string(),
        };
        let usage = Cli::try_parse_from(["assembly-planner", "x.toml", "--strategy", "greedy"])
            .unwrap_err()
            .exit_code();

        assert_eq!(exit_status(&unsolvable), 3);
        assert_eq!(usage, 2);
        assert_ne!(i32::from(exit_status(&unsolvable)), usage);
    }

    #[test]
    fn test_file_values_apply_without_flags() {
        let file: FileConfig =
            toml::from_str("[planner]\ndirection = \"assembly\"\n\n[output]\ncolor = false\n").unwrap();

        let (params, output) = resolve(&cli(&["x.toml", "-q"]), &file);

        assert_eq!(params.direction, PlanDirection::Assembly);
        assert_eq!(params.strategy, SearchStrategy::Exhaustive);
        assert_eq!(output.format, OutputFormat::Full);
        assert!(!output.color);
        assert!(!output.show_progress);
    }
}
