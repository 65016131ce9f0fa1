//! Clap derive structures for the `nicconf` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// nicconf -- inspect and edit host network interface configuration
#[derive(Debug, Parser)]
#[command(
    name = "nicconf",
    version,
    about = "Inspect and edit network interface configuration",
    long_about = "Loads the interface list and the configuration document from the\n\
        configuration API, then lists, shows or edits per-interface settings.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "NICCONF_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, short = 'a', env = "NICCONF_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "NICCONF_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "NICCONF_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "NICCONF_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List known interfaces and whether each has a stored configuration
    #[command(alias = "ls")]
    List,

    /// Show the configuration of one interface, or the whole document
    Show(ShowArgs),

    /// Replace the configuration of one interface
    Edit(EditArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Interface name (omit to print every stored configuration)
    pub ifname: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Interface name
    pub ifname: String,

    /// Complete replacement configuration as JSON, or @path to read it from a file
    pub value: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Show the effective configuration
    Show,

    /// Write a config file (interactive unless --name and --url are given)
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Profile name
    #[arg(long)]
    pub name: Option<String>,

    /// API base URL for the profile
    #[arg(long)]
    pub url: Option<String>,

    /// Custom CA certificate for the profile
    #[arg(long)]
    pub ca_cert: Option<PathBuf>,

    /// Write to this file instead of the default location
    #[arg(long)]
    pub file: Option<PathBuf>,
}
