//! Show presentation: the effective configuration seen by runtime code.

use crate::error::GuildError;
use crate::guild::{ContextSource, GuildContext};
use serde_json::json;

fn source_label(context: &GuildContext) -> &'static str {
    match (context.source(), context.is_artifact_backed()) {
        (ContextSource::Artifact, true) => "artifact",
        (ContextSource::Artifact, false) => "guild config (no artifact)",
        (ContextSource::UserConfig, _) => "guild config",
    }
}

pub fn format_context_text(context: &GuildContext) -> String {
    let config = context.config();
    let mut lines = vec![
        format!("Guild: {}", config.guild_name),
        format!("Title: {}", config.title),
        format!("Description: {}", config.description),
        format!("Logo: {}", config.logo),
        format!("Logo path: {}", context.logo_path()),
        format!("Primary color: {}", config.theme.primary_color),
        format!("Accent color: {}", config.theme.accent_color),
    ];
    if !config.extra.is_empty() {
        let keys: Vec<&str> = config.extra.keys().map(String::as_str).collect();
        lines.push(format!("Extra keys: {}", keys.join(", ")));
    }
    lines.push(format!("Source: {}", source_label(context)));
    lines.join("\n")
}

pub fn format_context_json(context: &GuildContext) -> Result<String, GuildError> {
    let out = json!({
        "source": source_label(context),
        "logoPath": context.logo_path(),
        "config": context.config(),
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| GuildError::Config(format!("Failed to render configuration: {}", e)))
}
