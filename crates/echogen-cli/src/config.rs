//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ECHOGEN_OUTPUT__NO_COLOR=true`,
//!    `ECHOGEN_GENERATE__OUTPUT_DIR=internal`, ...
//! 3. Config file (`--config FILE`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Generation settings.
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; used when `--output-format` is
    /// left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Base directory for feature directories. Unset means the working
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> CliResult<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("ECHOGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| config_error(path, e))?;

        settings
            .try_deserialize()
            .map_err(|e| config_error(path, e))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.echogen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "echogen", "echogen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".echogen.toml"))
    }
}

fn config_error(path: &Path, err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: format!("cannot load {}", path.display()),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
        assert!(cfg.generate.output_dir.is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("absent.toml");
        let err = AppConfig::load(Some(&missing)).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn reads_partial_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[generate]\noutput_dir = \"internal/app\"\n").unwrap();

        let cfg = AppConfig::load_from(&path, true).unwrap();
        assert_eq!(cfg.generate.output_dir, Some(PathBuf::from("internal/app")));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[output\nno_color = ").unwrap();

        assert!(AppConfig::load_from(&path, true).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
