//! Presentation-level configuration
//!
//! Resolved output settings: file configuration overridden by CLI flags.

use assembly_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Target of the Graphviz export, if any
    pub dot: Option<PathBuf>,
    /// Show the search spinner
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            dot: None,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Machine-readable output must not be interleaved with a spinner.
    pub fn wants_progress(&self) -> bool {
        self.show_progress && self.format != OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_hides_progress() {
        let config = OutputConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        assert!(!config.wants_progress());
        assert!(OutputConfig::default().wants_progress());
    }
}
