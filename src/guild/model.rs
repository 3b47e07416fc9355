//! Guild configuration records: the partial user input, the merged
//! configuration, and the resolved artifact written for the site runtime.

use super::layout::DEFAULT_LOGO;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the derived logo field; never taken from user input.
pub(crate) const LOGO_FILE_KEY: &str = "logoFile";

/// Site theme colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub accent_color: String,

    /// Extra theme keys supplied by the user, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#00d4ff".to_string(),
            accent_color: "#ffd700".to_string(),
            extra: Map::new(),
        }
    }
}

/// Complete guild configuration: defaults with user overrides applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildConfig {
    pub guild_name: String,
    pub title: String,
    pub description: String,
    /// Logo file name, relative to the data directory.
    pub logo: String,
    pub theme: Theme,

    /// Extra top-level keys supplied by the user, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self {
            guild_name: "SWGoH Guild".to_string(),
            title: "SWGoH Raid Analysis".to_string(),
            description: "Advanced Guild Raid Analytics for Star Wars: Galaxy of Heroes"
                .to_string(),
            logo: DEFAULT_LOGO.to_string(),
            theme: Theme::default(),
            extra: Map::new(),
        }
    }
}

impl GuildConfig {
    /// Whether the configured logo is something other than the bundled one.
    pub fn has_custom_logo(&self) -> bool {
        !self.logo.is_empty() && self.logo != DEFAULT_LOGO
    }

    /// Attach the served logo file name, producing the resolved artifact.
    pub fn with_logo_file(self, logo_file: impl Into<String>) -> ResolvedConfig {
        ResolvedConfig {
            config: self,
            logo_file: logo_file.into(),
        }
    }
}

/// The artifact written to `src/config/guild.json`: the merged configuration
/// plus the logo file name the site should actually serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(flatten)]
    pub config: GuildConfig,
    pub logo_file: String,
}

impl ResolvedConfig {
    /// Pretty JSON with a trailing newline. Output is deterministic for equal values.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Partial theme as found in the user configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTheme {
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial configuration as found in `data/guild-config.json`.
///
/// Every field is optional; `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    pub guild_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub theme: Option<UserTheme>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
