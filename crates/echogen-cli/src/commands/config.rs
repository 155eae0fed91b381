//! `echogen config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output.header("Current Configuration:")?;
            output.print(&render(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn renders_default_sections() {
        let s = render(&AppConfig::default()).unwrap();
        assert!(s.contains("[output]"));
        assert!(s.contains("no_color = false"));
        assert!(s.contains("format = \"auto\""));
    }

    #[test]
    fn renders_output_dir_when_set() {
        let mut cfg = AppConfig::default();
        cfg.generate.output_dir = Some(PathBuf::from("internal/app"));
        let s = render(&cfg).unwrap();
        assert!(s.contains("output_dir = \"internal/app\""));
    }
}
