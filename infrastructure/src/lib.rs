//! Infrastructure layer for assembly-planner
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the TOML description reader and
//! configuration file loading.

pub mod config;
pub mod description;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileOutputFormat, FilePlannerConfig};
pub use description::{DescriptionError, LoadedDescription, TomlDescriptionLoader, parse_description};
