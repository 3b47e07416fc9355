//! CLI parse: clap types for guildcfg. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// guildcfg - guild configuration resolver for the raid analytics site
#[derive(Parser)]
#[command(name = "guildcfg")]
#[command(about = "Resolve guild branding configuration and keep generated data fresh")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides guildcfg.toml in the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the guild configuration over defaults and write the resolved artifact
    Resolve {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Watch the data directory and re-run conversion and resolution on change
    Watch {
        /// Debounce window in milliseconds (overrides config)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
    /// Show the effective configuration as the site runtime sees it
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Read the resolved artifact instead of the raw guild configuration
        #[arg(long)]
        from_artifact: bool,
    },
}
