//! Configuration file loading for assembly-planner
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./assembly-planner.toml` or `./.assembly-planner.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/assembly-planner/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileOutputFormat, FilePlannerConfig};
pub use loader::ConfigLoader;
