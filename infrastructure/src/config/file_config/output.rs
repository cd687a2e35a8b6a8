//! Output configuration from TOML (`[output]` section)

use assembly_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Re-export OutputFormat from domain for convenience
pub use assembly_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Write the annotated graph as Graphviz DOT to this path
    pub dot: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            dot: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.color);
        assert!(config.output.dot.is_none());
    }

    #[test]
    fn test_dot_path_deserialize() {
        let config: FileOutputConfig = toml::from_str(
            r#"
format = "summary"
color = false
dot = "out/plan.dot"
"#,
        )
        .unwrap();
        assert_eq!(config.format, Some(OutputFormat::Summary));
        assert!(!config.color);
        assert_eq!(config.dot, Some(PathBuf::from("out/plan.dot")));
    }
}
