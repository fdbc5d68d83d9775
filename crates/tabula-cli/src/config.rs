//! Configuration file support.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tabula::{ConvertOptions, Format};

/// Main configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default CLI options.
    pub defaults: Defaults,
}

/// Default CLI options. Command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Surface name (`data` or `table`).
    pub surface: Option<String>,
    /// Input format when neither `--from` nor the input extension decides it.
    pub from: Option<Format>,
    /// Output format when neither `--to` nor the output extension decides it.
    pub to: Option<Format>,
    /// Writer options (`table_name`), overridden by `--table`.
    #[serde(flatten)]
    pub options: ConvertOptions,
    /// Enable verbose logging by default.
    pub verbose: bool,
}

impl Config {
    /// Load config from the default location (~/.config/tabula/config.toml).
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Load config from a specific path.
    ///
    /// A missing file gives the defaults; an unreadable or malformed one
    /// gives the defaults with a warning.
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents, &path),
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    fn parse(contents: &str, path: &Path) -> Self {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse config file {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tabula").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_section() {
        let config = Config::parse(
            r#"
            [defaults]
            surface = "table"
            to = "json"
            table_name = "people"
            verbose = true
            "#,
            Path::new("config.toml"),
        );

        assert_eq!(config.defaults.surface.as_deref(), Some("table"));
        assert_eq!(config.defaults.from, None);
        assert_eq!(config.defaults.to, Some(Format::Json));
        assert_eq!(config.defaults.options.table_name, "people");
        assert!(config.defaults.verbose);
    }

    #[test]
    fn test_parse_formats() {
        let config = Config::parse(
            "[defaults]\nfrom = \"tsv\"\nto = \"sql\"\n",
            Path::new("config.toml"),
        );

        assert_eq!(config.defaults.from, Some(Format::Tsv));
        assert_eq!(config.defaults.to, Some(Format::Sql));
        assert_eq!(config.defaults.options, ConvertOptions::default());
    }

    #[test]
    fn test_unknown_format_falls_back() {
        let config = Config::parse("[defaults]\nfrom = \"jsn\"\n", Path::new("config.toml"));
        assert!(config.defaults.from.is_none());
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let config = Config::parse("[defaults\nsurface = ", Path::new("bad.toml"));
        assert!(config.defaults.surface.is_none());
        assert!(!config.defaults.verbose);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from_path(Some(PathBuf::from("/nonexistent/tabula.toml")));
        assert_eq!(config.defaults.options.table_name, "table_name");

        let config = Config::load_from_path(None);
        assert!(config.defaults.to.is_none());
    }
}
