//! Assembly description input adapter
//!
//! Reads the AND/OR graph, the action, subassembly and agent catalogs and
//! the root from a TOML file and implements the application's
//! [`DescriptionSource`](assembly_application::DescriptionSource) port.

mod error;
mod loader;
mod raw;

pub use error::DescriptionError;
pub use loader::{LoadedDescription, TomlDescriptionLoader, parse_description};
