//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // An explicit flag wins over `output.format` from the config.
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.  Not suppressed in quiet mode, a file
    /// that was not written must always be reported.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document.  Written even in quiet mode since the
    /// caller explicitly asked for it.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let doc = serde_json::to_string_pretty(value).map_err(|e| CliError::Internal {
            message: format!("cannot serialise output: {e}"),
        })?;
        self.term.write_line(&doc)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, no_color: bool, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = make_manager(OutputFormat::Plain, true, &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "JSON".into();
        let out = make_manager(OutputFormat::Auto, true, &config);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn unknown_config_format_falls_back_to_detection() {
        let mut config = AppConfig::default();
        config.output.format = "yaml".into();
        let out = make_manager(OutputFormat::Auto, true, &config);
        assert_ne!(out.format(), OutputFormat::Auto);
    }

    #[test]
    fn color_only_for_human_output() {
        let config = AppConfig::default();
        assert!(!make_manager(OutputFormat::Human, false, &config).no_color);
        assert!(make_manager(OutputFormat::Human, true, &config).no_color);
        assert!(make_manager(OutputFormat::Plain, false, &config).no_color);
    }

    #[test]
    fn config_no_color_disables_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(make_manager(OutputFormat::Human, false, &config).no_color);
    }
}
