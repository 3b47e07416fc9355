//! Build-time resolution: defaults + user overrides + custom logo, written
//! as a complete artifact for the site runtime.

use super::layout::ProjectLayout;
use super::logo::{resolve_logo, LogoOutcome};
use super::merge::{merge_user_config, read_user_config};
use super::model::{GuildConfig, ResolvedConfig};
use crate::error::GuildError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Where the merged configuration came from on a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No user configuration file; defaults only.
    Defaults,
    /// User configuration merged over defaults.
    UserConfig,
    /// User configuration present but unreadable; defaults only.
    MalformedFallback,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Defaults => "defaults",
            ConfigSource::UserConfig => "user-config",
            ConfigSource::MalformedFallback => "defaults (user config malformed)",
        }
    }
}

/// Report of one resolution pass.
#[derive(Debug)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub source: ConfigSource,
    pub logo: LogoOutcome,
    pub artifact: PathBuf,
}

/// Produces the resolved configuration artifact.
pub struct ConfigResolver {
    layout: ProjectLayout,
}

impl ConfigResolver {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run one resolution pass.
    ///
    /// Missing or malformed user input and unusable logos degrade to
    /// defaults. The only error returned is a failure to write the artifact.
    pub fn resolve(&self) -> Result<Resolution, GuildError> {
        info!(root = %self.layout.root.display(), "Starting guild configuration processing");

        let (config, source, requested_logo) = self.load_merged();
        let logo = resolve_logo(requested_logo.as_deref(), &self.layout);
        let resolved = config.with_logo_file(logo.logo_file());

        write_artifact(&self.layout.artifact, &resolved)?;
        info!(
            artifact = %self.layout.artifact.display(),
            source = source.as_str(),
            logo_file = %resolved.logo_file,
            "Generated guild configuration"
        );

        Ok(Resolution {
            config: resolved,
            source,
            logo,
            artifact: self.layout.artifact.clone(),
        })
    }

    /// Merged configuration, where it came from, and the logo the user named.
    fn load_merged(&self) -> (GuildConfig, ConfigSource, Option<String>) {
        match read_user_config(&self.layout.user_config) {
            Ok(user) => {
                info!(path = %self.layout.user_config.display(), "Loaded custom guild configuration");
                let requested_logo = user.logo.clone();
                (merge_user_config(user), ConfigSource::UserConfig, requested_logo)
            }
            Err(GuildError::MissingInput(path)) => {
                info!(path = %path.display(), "No guild configuration found, using defaults");
                (GuildConfig::default(), ConfigSource::Defaults, None)
            }
            Err(e) => {
                error!(error = %e, "Error reading guild configuration, using defaults");
                (GuildConfig::default(), ConfigSource::MalformedFallback, None)
            }
        }
    }
}

/// Write the artifact in full, replacing any previous one.
///
/// Goes through a temporary file and a rename so readers never see a
/// partially written document.
fn write_artifact(path: &Path, resolved: &ResolvedConfig) -> Result<(), GuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GuildError::io(parent, e))?;
    }

    let json = resolved
        .to_json_pretty()
        .map_err(|e| GuildError::io(path, e.into()))?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json).map_err(|e| GuildError::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| GuildError::io(path, e))?;
    Ok(())
}
