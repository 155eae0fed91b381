//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `echogen` generates the feature slice named by `-f`.
#[derive(Debug, Parser)]
#[command(
    name    = "echogen",
    bin_name = "echogen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold an Echo + Wire feature slice",
    long_about = "echogen writes datasource, repository, usecase, handler, router, \
                  provider and model files for one feature into ./<feature>/.",
    after_help = "EXAMPLES:\n\
        \x20 echogen -f order\n\
        \x20 echogen -f=order --dry-run\n\
        \x20 echogen -f order --only handler.go\n\
        \x20 echogen -f invoice --dir internal/app\n\
        \x20 echogen list -f order\n\
        \x20 echogen completions bash > /usr/share/bash-completion/completions/echogen",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the default (generate) action.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute instead of generating.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for the default action.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Feature name: output directory, Go package, and model file stem.
    ///
    /// Omitting it yields an empty name, which is rejected.
    #[arg(
        short = 'f',
        long = "feature",
        value_name = "NAME",
        help = "Feature name, e.g. -f=order"
    )]
    pub feature: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Regenerate a single file of the slice instead of all seven.
    #[arg(
        long = "only",
        value_name = "FILE",
        help = "Regenerate only FILE, e.g. --only handler.go"
    )]
    pub only: Option<String>,

    /// Create the feature directory under DIR instead of the current directory.
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Base directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,
}

impl GenerateArgs {
    /// The feature name as typed, or `""` when `-f` was not given.
    pub fn feature_name(&self) -> &str {
        self.feature.as_deref().unwrap_or_default()
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the files of a feature slice.
    #[command(
        visible_alias = "ls",
        about = "List the files a feature slice consists of",
        after_help = "EXAMPLES:\n\
            \x20 echogen list\n\
            \x20 echogen list -f order --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 echogen completions bash > ~/.local/share/bash-completion/completions/echogen\n\
            \x20 echogen completions zsh  > ~/.zfunc/_echogen\n\
            \x20 echogen completions fish > ~/.config/fish/completions/echogen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the echogen configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 echogen config show\n\
            \x20 echogen config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `echogen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Resolve the model filename for this feature.
    #[arg(short = 'f', long = "feature", value_name = "NAME")]
    pub feature: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Filename and layer columns.
    Table,
    /// One filename per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `echogen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `echogen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path of the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
