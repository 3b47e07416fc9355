//! CLI command-name contract for log spans.

use crate::cli::parse::Commands;

/// Command name string for the command span (e.g. "resolve", "watch").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Resolve { .. } => "resolve",
        Commands::Watch { .. } => "watch",
        Commands::Show { .. } => "show",
    }
}
