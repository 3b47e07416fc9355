//! Runtime access to the effective guild configuration.
//!
//! A [`GuildContext`] is built once at startup and handed to runtime code.
//! It keeps what it loaded until [`GuildContext::reload`] is called; there is
//! no hidden process-wide cache.

use super::layout::{ProjectLayout, DATA_ROUTE, DEFAULT_LOGO};
use super::logo::is_contained;
use super::merge::{merge_user_config, read_user_config};
use super::model::{GuildConfig, ResolvedConfig};
use crate::error::GuildError;
use parking_lot::RwLock;
use std::path::Path;
use tracing::{debug, warn};

/// Which input a context prefers to load from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    /// The raw user configuration, merged over defaults.
    UserConfig,
    /// The artifact written by the resolver, with the user configuration as fallback.
    Artifact,
}

#[derive(Debug, Clone)]
struct Loaded {
    config: GuildConfig,
    /// Set when the configuration came from the resolver's artifact.
    logo_file: Option<String>,
}

/// Effective configuration for the running site.
#[derive(Debug)]
pub struct GuildContext {
    layout: ProjectLayout,
    source: ContextSource,
    state: RwLock<Loaded>,
}

impl GuildContext {
    /// Load from the raw user configuration, independent of whether the
    /// resolver has run.
    pub fn load(layout: ProjectLayout) -> Self {
        Self::with_source(layout, ContextSource::UserConfig)
    }

    /// Load from the resolver's artifact. Falls back to the raw user
    /// configuration when no readable artifact exists.
    pub fn from_artifact(layout: ProjectLayout) -> Self {
        Self::with_source(layout, ContextSource::Artifact)
    }

    pub fn with_source(layout: ProjectLayout, source: ContextSource) -> Self {
        let loaded = read_loaded(&layout, source);
        Self {
            layout,
            source,
            state: RwLock::new(loaded),
        }
    }

    pub fn source(&self) -> ContextSource {
        self.source
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Current effective configuration. Unchanged until [`reload`](Self::reload).
    pub fn config(&self) -> GuildConfig {
        self.state.read().config.clone()
    }

    /// Whether the current state was read from the resolver's artifact.
    pub fn is_artifact_backed(&self) -> bool {
        self.state.read().logo_file.is_some()
    }

    /// Re-read inputs from disk, replacing the held configuration.
    pub fn reload(&self) {
        let loaded = read_loaded(&self.layout, self.source);
        *self.state.write() = loaded;
    }

    /// URL path of the logo to embed in rendered pages.
    ///
    /// From the artifact this is the resolver's served file. From the raw user
    /// configuration it is `/data/<logo>` when that file exists, otherwise the
    /// bundled default.
    pub fn logo_path(&self) -> String {
        let state = self.state.read();
        if let Some(logo_file) = &state.logo_file {
            return format!("/{}", logo_file);
        }

        let config = &state.config;
        if config.has_custom_logo()
            && is_contained(&config.logo)
            && self.layout.data_dir.join(&config.logo).exists()
        {
            return format!("{}/{}", DATA_ROUTE, config.logo);
        }

        format!("/{}", DEFAULT_LOGO)
    }
}

fn read_loaded(layout: &ProjectLayout, source: ContextSource) -> Loaded {
    if source == ContextSource::Artifact {
        match read_artifact(&layout.artifact) {
            Ok(resolved) => {
                return Loaded {
                    config: resolved.config,
                    logo_file: Some(resolved.logo_file),
                }
            }
            Err(GuildError::MissingInput(path)) => {
                debug!(path = %path.display(), "No resolved artifact, reading user configuration")
            }
            Err(e) => warn!(error = %e, "Failed to read resolved artifact, reading user configuration"),
        }
    }

    let config = match read_user_config(&layout.user_config) {
        Ok(user) => merge_user_config(user),
        Err(GuildError::MissingInput(_)) => GuildConfig::default(),
        Err(e) => {
            warn!(error = %e, "Failed to load guild config, using defaults");
            GuildConfig::default()
        }
    };
    Loaded {
        config,
        logo_file: None,
    }
}

fn read_artifact(path: &Path) -> Result<ResolvedConfig, GuildError> {
    if !path.exists() {
        return Err(GuildError::MissingInput(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| GuildError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| GuildError::MalformedInput {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
