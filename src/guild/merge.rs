//! Reading the user configuration and merging it over defaults.
//!
//! Both the build-time resolver and the runtime context go through
//! [`merge_user_config`], so they cannot disagree on the merge rules.

use super::model::{GuildConfig, Theme, UserConfig, LOGO_FILE_KEY};
use crate::error::GuildError;
use serde_json::Value;
use std::path::Path;

/// Read and parse the user configuration at `path`.
///
/// Returns [`GuildError::MissingInput`] when the file does not exist and
/// [`GuildError::MalformedInput`] when it is not a JSON object of the
/// expected shape. A malformed file is rejected as a whole.
pub fn read_user_config(path: &Path) -> Result<UserConfig, GuildError> {
    if !path.exists() {
        return Err(GuildError::MissingInput(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| GuildError::io(path, e))?;
    parse_user_config(&content).map_err(|reason| GuildError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_user_config(content: &str) -> Result<UserConfig, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err("expected a JSON object at the top level".to_string());
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Shallow merge of `user` over the defaults; `theme` merges field by field.
pub fn merge_user_config(user: UserConfig) -> GuildConfig {
    let defaults = GuildConfig::default();

    let theme = match user.theme {
        Some(theme) => Theme {
            primary_color: theme.primary_color.unwrap_or(defaults.theme.primary_color),
            accent_color: theme.accent_color.unwrap_or(defaults.theme.accent_color),
            extra: theme.extra,
        },
        None => defaults.theme,
    };

    let mut extra = user.extra;
    extra.remove(LOGO_FILE_KEY);

    GuildConfig {
        guild_name: user.guild_name.unwrap_or(defaults.guild_name),
        title: user.title.unwrap_or(defaults.title),
        description: user.description.unwrap_or(defaults.description),
        logo: user.logo.unwrap_or(defaults.logo),
        theme,
        extra,
    }
}
