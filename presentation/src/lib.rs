//! Presentation layer for assembly-planner
//!
//! This crate contains CLI definitions, plan formatters, the DOT export
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, DirectionArg, HeuristicArg, OutputFormat, StrategyArg};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::dot::DotWriter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
