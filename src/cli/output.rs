//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::GuildError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &GuildError) -> String {
    match e {
        GuildError::Config(msg) => format!(
            "Configuration error: {}\nCheck guildcfg.toml or the --config file.",
            msg
        ),
        other => other.to_string(),
    }
}
