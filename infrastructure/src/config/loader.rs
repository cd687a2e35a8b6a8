//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "assembly-planner";
const PROJECT_FILES: [&str; 2] = ["assembly-planner.toml", ".assembly-planner.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./assembly-planner.toml` or `./.assembly-planner.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/assembly-planner/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut layers = Vec::new();
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                layers.push(global_path);
            }
        }
        if let Some(project_path) = Self::project_config_path() {
            layers.push(project_path);
        }
        if let Some(path) = config_path {
            layers.push(path.clone());
        }
        Self::load_layers(&layers)
    }

    /// Merge the given files over the defaults, later files winning.
    ///
    /// Missing files are skipped by figment; malformed ones fail the load.
    pub fn load_layers<P: AsRef<Path>>(layers: &[P]) -> Result<FileConfig, Box<figment::Error>> {
        let figment = layers.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path.as_ref())),
        );
        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/assembly-planner/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = config_path {
            let found = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{found:^7}] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [ FOUND ] Project:  {}", path.display());
        } else {
            println!("  [       ] Project:  ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            let found = if path.exists() { " FOUND " } else { "       " };
            println!("  [{found}] Global:   {}", path.display());
        }

        println!("  [       ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assembly_domain::OutputFormat;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.planner.strategy, "exhaustive");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("assembly-planner"));
    }

    #[test]
    fn test_later_layer_wins_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(
            &global,
            "[planner]\nstrategy = \"best-first\"\nmax_expansions = 10\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        fs::write(&explicit, "[planner]\nmax_expansions = 99\n").unwrap();

        let config = ConfigLoader::load_layers(&[&global, &explicit]).unwrap();

        assert_eq!(config.planner.strategy, "best-first");
        assert_eq!(config.planner.max_expansions, Some(99));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.planner.heuristic, "none");
    }

    #[test]
    fn test_missing_layer_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_layers(&[dir.path().join("absent.toml")]).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_malformed_layer_fails() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[planner]\nmax_expansions = \"lots\"\n").unwrap();

        assert!(ConfigLoader::load_layers(&[&broken]).is_err());
    }
}
