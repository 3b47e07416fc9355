//! Resolve presentation: summary of one resolution pass.

use crate::error::GuildError;
use crate::guild::{LogoOutcome, Resolution};
use serde_json::json;

fn logo_summary(logo: &LogoOutcome) -> String {
    match logo {
        LogoOutcome::Default => "default".to_string(),
        LogoOutcome::Custom { source, target, .. } => {
            format!("copied {} -> {}", source.display(), target.display())
        }
        LogoOutcome::Fallback { error, .. } => format!("default ({})", error),
    }
}

pub fn format_resolution_text(resolution: &Resolution) -> String {
    let config = &resolution.config.config;
    format!(
        "Guild configuration resolved:\n  Artifact: {}\n  Source: {}\n  Guild: {}\n  Title: {}\n  Theme: {} / {}\n  Logo file: {}\n  Logo: {}",
        resolution.artifact.display(),
        resolution.source.as_str(),
        config.guild_name,
        config.title,
        config.theme.primary_color,
        config.theme.accent_color,
        resolution.config.logo_file,
        logo_summary(&resolution.logo),
    )
}

pub fn format_resolution_json(resolution: &Resolution) -> Result<String, GuildError> {
    let out = json!({
        "artifact": resolution.artifact.display().to_string(),
        "source": resolution.source.as_str(),
        "logo": logo_summary(&resolution.logo),
        "config": resolution.config,
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| GuildError::Config(format!("Failed to render resolution: {}", e)))
}
